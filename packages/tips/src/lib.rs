#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Curated safety tip catalog.
//!
//! Tips ship inside the crate as TOML and are parsed once on first access,
//! like the zone catalog in `sakhi_zones`. The tip-of-the-day rotation is a
//! pure function of the calendar date, so every device shows the same tip
//! on the same day without any coordination.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

const TIPS_TOML: &str = include_str!("../catalog/tips.toml");

/// Broad topic a tip belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TipCategory {
    Travel,
    Digital,
    Personal,
    Emergency,
    General,
}

impl TipCategory {
    /// Every tip category, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Travel,
            Self::Digital,
            Self::Personal,
            Self::Emergency,
            Self::General,
        ]
    }
}

/// How urgently a tip should be surfaced.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TipPriority {
    High,
    Medium,
    Low,
}

/// A single safety tip from the embedded catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyTip {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    pub priority: TipPriority,
}

#[derive(Debug, Deserialize)]
struct TipCatalog {
    tips: Vec<SafetyTip>,
}

static CATALOG: LazyLock<TipCatalog> = LazyLock::new(|| {
    let catalog: TipCatalog =
        toml::from_str(TIPS_TOML).unwrap_or_else(|e| panic!("Failed to parse tips.toml: {e}"));
    log::info!(
        "Loaded {} safety tips from the embedded catalog",
        catalog.tips.len()
    );
    catalog
});

/// Returns every tip in catalog order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (a compile-time guarantee in
/// practice, since the catalog ships inside the crate).
#[must_use]
pub fn all_tips() -> &'static [SafetyTip] {
    &CATALOG.tips
}

/// Returns the tips in the given category, in catalog order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed.
#[must_use]
pub fn tips_by_category(category: TipCategory) -> Vec<&'static SafetyTip> {
    all_tips()
        .iter()
        .filter(|tip| tip.category == category)
        .collect()
}

/// Returns the tip rotated in for the given date.
///
/// The rotation is the day of year modulo the catalog size, so consecutive
/// days walk the catalog in order and the mapping repeats each year.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed.
#[must_use]
pub fn tip_of_the_day(date: NaiveDate) -> &'static SafetyTip {
    let tips = all_tips();
    let day = usize::try_from(date.ordinal0()).unwrap_or_default();
    &tips[day % tips.len()]
}
