//! Unsafe-zone proximity assessment.

use sakhi_geo::distance_km;
use sakhi_zones_models::{SafetyLabel, SafetyZone};

/// Default warning radius in kilometers.
pub const DEFAULT_WARN_RADIUS_KM: f64 = 0.5;

/// Policy for when entering an unsafe zone warrants a warning.
///
/// Pure assessment only. Deciding whether a warning was already issued
/// (and so should be suppressed) is the chat session's job, since that
/// depends on transcript state.
#[derive(Debug, Clone, Copy)]
pub struct ProximityWatch {
    warn_radius_km: f64,
}

impl Default for ProximityWatch {
    fn default() -> Self {
        Self::new(DEFAULT_WARN_RADIUS_KM)
    }
}

impl ProximityWatch {
    /// Creates a watch that warns within the given radius, in kilometers.
    #[must_use]
    pub const fn new(warn_radius_km: f64) -> Self {
        Self { warn_radius_km }
    }

    /// The configured warning radius in kilometers.
    #[must_use]
    pub const fn warn_radius_km(&self) -> f64 {
        self.warn_radius_km
    }

    /// Returns the distance to the zone when it warrants a warning:
    /// the zone is labelled `Unsafe` and the position is within the
    /// warning radius (inclusive). `None` otherwise.
    #[must_use]
    pub fn assess(&self, zone: &SafetyZone, latitude: f64, longitude: f64) -> Option<f64> {
        if zone.safety_label != SafetyLabel::Unsafe {
            return None;
        }
        let distance = distance_km(latitude, longitude, zone.latitude, zone.longitude);
        (distance <= self.warn_radius_km).then_some(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakhi_zones::bundled_zones;

    fn unsafe_zone() -> &'static SafetyZone {
        bundled_zones()
            .iter()
            .find(|z| z.safety_label == SafetyLabel::Unsafe)
            .unwrap()
    }

    fn safe_zone() -> &'static SafetyZone {
        bundled_zones()
            .iter()
            .find(|z| z.safety_label == SafetyLabel::Safe)
            .unwrap()
    }

    #[test]
    fn warns_inside_an_unsafe_zone() {
        let watch = ProximityWatch::default();
        let zone = unsafe_zone();
        let distance = watch.assess(zone, zone.latitude, zone.longitude).unwrap();
        assert!(distance.abs() < 1e-9);
    }

    #[test]
    fn never_warns_for_safe_zones() {
        let watch = ProximityWatch::new(1000.0);
        let zone = safe_zone();
        assert!(watch.assess(zone, zone.latitude, zone.longitude).is_none());
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let zone = unsafe_zone();
        // Position a fixed offset away, then set the radius to exactly
        // that distance.
        let (lat, lon) = (zone.latitude + 0.002, zone.longitude);
        let distance = distance_km(lat, lon, zone.latitude, zone.longitude);

        let at_boundary = ProximityWatch::new(distance);
        assert!(at_boundary.assess(zone, lat, lon).is_some());

        let just_under = ProximityWatch::new(distance * 0.99);
        assert!(just_under.assess(zone, lat, lon).is_none());
    }

    #[test]
    fn default_radius_is_half_a_kilometer() {
        let watch = ProximityWatch::default();
        assert!((watch.warn_radius_km() - 0.5).abs() < f64::EPSILON);
    }
}
