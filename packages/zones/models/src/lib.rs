#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Safety zone record types and the safety label taxonomy.
//!
//! This crate defines the canonical zone record shared by the proximity
//! index, the assistant, and the CLI. Zone data itself lives in the
//! embedded catalog owned by `sakhi_zones`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Safety classification for a zone, ordered by increasing risk.
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
pub enum SafetyLabel {
    /// Well-lit, high foot traffic, low reported incident rate
    Safe,
    /// Fine during the day, caution advised after dark
    Moderate,
    /// Avoid when alone, especially at night
    Unsafe,
}

impl SafetyLabel {
    /// Returns all labels, from lowest to highest risk.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Safe, Self::Moderate, Self::Unsafe]
    }
}

/// A curated safety zone from the embedded catalog.
///
/// Records are read-only for the lifetime of the process. Scores use a
/// 0-10 scale by catalog convention and are not range-enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyZone {
    /// Unique catalog key, e.g. `delhi-connaught-place`.
    pub id: String,
    /// City the zone belongs to.
    pub city: String,
    /// Locality or landmark name within the city.
    pub area: String,
    /// Latitude in decimal degrees (WGS84).
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84).
    pub longitude: f64,
    /// Overall safety classification.
    pub safety_label: SafetyLabel,
    /// Composite safety rating, 0-10.
    pub safety_score: f64,
    /// Street lighting rating, 0-10.
    pub lighting_score: f64,
    /// Pedestrian activity rating, 0-10.
    pub foot_traffic_score: f64,
    /// Reported incidents per 1000 residents.
    pub crime_rate: f64,
    /// Name of the closest police station.
    pub nearest_police_station: String,
    /// Precomputed distance to that station in kilometers.
    pub police_station_distance: f64,
    /// Date of the most recent reported incident, if any.
    pub last_incident_date: Option<NaiveDate>,
    /// Free-text guidance shown alongside the zone.
    pub advice: String,
}
