#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Nearest-safety-zone proximity index.
//!
//! Wraps the embedded zone catalog in a small linear-scan index. The
//! catalog is 15 entries, so a full scan per query beats any spatial
//! structure on both simplicity and constant factors here.

mod catalog;

pub use catalog::bundled_zones;
pub use sakhi_zones_models::{SafetyLabel, SafetyZone};

use sakhi_geo::distance_km;

/// Read-only proximity index over an ordered slice of zones.
///
/// Queries never mutate the index, so it is freely shareable across
/// threads once built.
#[derive(Debug, Clone, Copy)]
pub struct ZoneIndex<'a> {
    zones: &'a [SafetyZone],
}

impl<'a> ZoneIndex<'a> {
    /// Creates an index over the given zones, preserving their order.
    #[must_use]
    pub const fn new(zones: &'a [SafetyZone]) -> Self {
        Self { zones }
    }

    /// Creates an index over the embedded catalog.
    #[must_use]
    pub fn bundled() -> ZoneIndex<'static> {
        ZoneIndex::new(catalog::bundled_zones())
    }

    /// All zones in catalog order.
    #[must_use]
    pub const fn zones(&self) -> &'a [SafetyZone] {
        self.zones
    }

    /// Number of zones in the index.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the index holds no zones.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Returns the zone closest to the given coordinates, or `None` for an
    /// empty index.
    ///
    /// The scan uses a strict less-than comparison, so when two zones are
    /// exactly equidistant the one earlier in catalog order wins. Non-finite
    /// coordinates are not rejected; a NaN query compares less-than to
    /// nothing and therefore yields the first zone.
    #[must_use]
    pub fn nearest_zone(&self, latitude: f64, longitude: f64) -> Option<&'a SafetyZone> {
        let first = self.zones.first()?;
        let mut nearest = first;
        let mut min_distance = distance_km(latitude, longitude, first.latitude, first.longitude);

        for zone in self.zones {
            let distance = distance_km(latitude, longitude, zone.latitude, zone.longitude);
            if distance < min_distance {
                min_distance = distance;
                nearest = zone;
            }
        }

        Some(nearest)
    }

    /// Returns all zones in the given city, in catalog order.
    ///
    /// City matching is case-insensitive and exact; an unknown city yields
    /// an empty list.
    #[must_use]
    pub fn zones_by_city(&self, city: &str) -> Vec<&'a SafetyZone> {
        self.zones
            .iter()
            .filter(|zone| zone.city.eq_ignore_ascii_case(city))
            .collect()
    }

    /// Returns each distinct city once, in first-appearance order.
    #[must_use]
    pub fn cities(&self) -> Vec<&'a str> {
        let mut cities: Vec<&str> = Vec::new();
        for zone in self.zones {
            if !cities.contains(&zone.city.as_str()) {
                cities.push(zone.city.as_str());
            }
        }
        cities
    }
}
