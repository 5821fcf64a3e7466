//! Zone catalog loading from the embedded TOML file.
//!
//! The catalog is baked into the binary at compile time via
//! [`include_str!`] and parsed once on first access. Editing
//! `catalog/zones.toml` is the only way zone data changes.

use std::sync::LazyLock;

use sakhi_zones_models::SafetyZone;
use serde::Deserialize;

const ZONES_TOML: &str = include_str!("../catalog/zones.toml");

#[derive(Debug, Deserialize)]
struct ZoneCatalog {
    zones: Vec<SafetyZone>,
}

static ZONES: LazyLock<Vec<SafetyZone>> = LazyLock::new(|| {
    let catalog: ZoneCatalog =
        toml::from_str(ZONES_TOML).unwrap_or_else(|e| panic!("Failed to parse zones.toml: {e}"));
    log::info!(
        "Loaded {} safety zones from the embedded catalog",
        catalog.zones.len()
    );
    catalog.zones
});

/// Returns the embedded zone catalog in its fixed order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (a compile-time guarantee in
/// practice, since the catalog ships inside the crate).
#[must_use]
pub fn bundled_zones() -> &'static [SafetyZone] {
    &ZONES
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakhi_zones_models::SafetyLabel;

    const EXPECTED_ZONE_COUNT: usize = 15;

    #[test]
    fn loads_all_zones() {
        assert_eq!(bundled_zones().len(), EXPECTED_ZONE_COUNT);
    }

    #[test]
    fn zone_ids_are_unique() {
        let mut ids: Vec<&str> = bundled_zones().iter().map(|z| z.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPECTED_ZONE_COUNT);
    }

    #[test]
    fn all_zones_have_required_fields() {
        for zone in bundled_zones() {
            assert!(!zone.id.is_empty(), "zone id is empty");
            assert!(!zone.city.is_empty(), "{}: city is empty", zone.id);
            assert!(!zone.area.is_empty(), "{}: area is empty", zone.id);
            assert!(
                !zone.nearest_police_station.is_empty(),
                "{}: no police station",
                zone.id
            );
            assert!(!zone.advice.is_empty(), "{}: no advice", zone.id);
            assert!(
                zone.latitude.is_finite() && zone.longitude.is_finite(),
                "{}: non-finite coordinates",
                zone.id
            );
            assert!(
                (-90.0..=90.0).contains(&zone.latitude),
                "{}: latitude out of range",
                zone.id
            );
            assert!(
                (-180.0..=180.0).contains(&zone.longitude),
                "{}: longitude out of range",
                zone.id
            );
        }
    }

    #[test]
    fn catalog_order_is_stable() {
        let first = &bundled_zones()[0];
        assert_eq!(first.id, "delhi-connaught-place");
        assert_eq!(first.safety_label, SafetyLabel::Safe);
    }

    #[test]
    fn optional_incident_dates_parse() {
        let hauz_khas = bundled_zones()
            .iter()
            .find(|z| z.id == "delhi-hauz-khas-village")
            .unwrap();
        assert!(hauz_khas.last_incident_date.is_none());

        let connaught = &bundled_zones()[0];
        let date = connaught.last_incident_date.unwrap();
        assert_eq!(date.to_string(), "2024-01-15");
    }
}
