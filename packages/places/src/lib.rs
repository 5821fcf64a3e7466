#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Verified hostel and hospital directory.
//!
//! The directory ships inside the crate as TOML and is parsed once on
//! first access, like the zone catalog in `sakhi_zones`. Hostel-only
//! fields (availability, safety rating, price) are optional on the record
//! and absent for hospitals.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

const PLACES_TOML: &str = include_str!("../catalog/places.toml");

/// What kind of place a directory entry is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlaceKind {
    Hostel,
    Hospital,
}

/// Bed availability at a hostel, ordered best first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Availability {
    Available,
    Limited,
    Full,
}

/// A hostel or hospital from the embedded directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub kind: PlaceKind,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Visitor rating out of 5, one decimal.
    pub rating: f64,
    pub distance_km: f64,
    pub amenities: Vec<String>,
    /// Safety rating out of 5; hostels only.
    pub safety_rating: Option<u8>,
    /// Bed availability; hostels only.
    pub availability: Option<Availability>,
    /// Price in rupees per day; hostels only.
    pub price_per_day: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct PlaceDirectory {
    places: Vec<Place>,
}

static DIRECTORY: LazyLock<PlaceDirectory> = LazyLock::new(|| {
    let directory: PlaceDirectory =
        toml::from_str(PLACES_TOML).unwrap_or_else(|e| panic!("Failed to parse places.toml: {e}"));
    log::info!(
        "Loaded {} places from the embedded directory",
        directory.places.len()
    );
    directory
});

/// Returns every place in directory order, hostels before hospitals.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (a compile-time guarantee in
/// practice, since the directory ships inside the crate).
#[must_use]
pub fn directory() -> &'static [Place] {
    &DIRECTORY.places
}

/// Returns the hostels, best availability first.
///
/// Hostels with equal availability keep their directory order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed.
#[must_use]
pub fn hostels() -> Vec<&'static Place> {
    let mut hostels: Vec<&Place> = directory()
        .iter()
        .filter(|place| place.kind == PlaceKind::Hostel)
        .collect();
    hostels.sort_by_key(|place| place.availability);
    hostels
}

/// Returns the hospitals in directory order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed.
#[must_use]
pub fn hospitals() -> Vec<&'static Place> {
    directory()
        .iter()
        .filter(|place| place.kind == PlaceKind::Hospital)
        .collect()
}

/// Returns the hostels with beds available right now, nearest first.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed.
#[must_use]
pub fn available_hostels() -> Vec<&'static Place> {
    let mut open: Vec<&Place> = directory()
        .iter()
        .filter(|place| {
            place.kind == PlaceKind::Hostel && place.availability == Some(Availability::Available)
        })
        .collect();
    open.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    open
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_PLACE_COUNT: usize = 7;

    #[test]
    fn loads_the_whole_directory() {
        assert_eq!(directory().len(), EXPECTED_PLACE_COUNT);
        let mut ids: Vec<&str> = directory().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPECTED_PLACE_COUNT);
    }

    #[test]
    fn hostels_carry_the_hostel_only_fields() {
        for place in directory() {
            match place.kind {
                PlaceKind::Hostel => {
                    assert!(place.availability.is_some(), "{}: no availability", place.id);
                    assert!(place.price_per_day.is_some(), "{}: no price", place.id);
                    let safety = place.safety_rating;
                    assert!(
                        safety.is_some_and(|r| (1..=5).contains(&r)),
                        "{}: bad safety rating {safety:?}",
                        place.id
                    );
                }
                PlaceKind::Hospital => {
                    assert!(place.availability.is_none(), "{}: availability set", place.id);
                    assert!(place.price_per_day.is_none(), "{}: price set", place.id);
                    assert!(place.safety_rating.is_none(), "{}: safety rating set", place.id);
                }
            }
        }
    }

    #[test]
    fn hostels_sort_best_availability_first() {
        let ids: Vec<&str> = hostels().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "dewan-kuldip-singh-girls-hostel",
                "bluearrow-pg-accommodation",
                "narayan-chandra-trust-hostel",
                "asha-sadan-girls-hostel",
            ]
        );
    }

    #[test]
    fn hospitals_keep_directory_order() {
        let ids: Vec<&str> = hospitals().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "golden-park-hospital",
                "iasis-hospital",
                "cardinal-gracias-memorial-hospital",
            ]
        );
    }

    #[test]
    fn available_hostels_come_nearest_first() {
        let open = available_hostels();
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].id, "dewan-kuldip-singh-girls-hostel");
        assert_eq!(open[1].id, "bluearrow-pg-accommodation");
        assert!(open[0].distance_km < open[1].distance_km);
        assert!(open
            .iter()
            .all(|p| p.availability == Some(Availability::Available)));
    }

    #[test]
    fn availability_orders_best_first() {
        assert!(Availability::Available < Availability::Limited);
        assert!(Availability::Limited < Availability::Full);
    }
}
