#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Great-circle distance math and coordinate formatting.
//!
//! All distances are in kilometers on a spherical Earth model. The
//! haversine form stays numerically stable for the short hops this app
//! cares about (city blocks to cross-city), which is why it is used
//! instead of the cheaper equirectangular approximation.

/// Mean Earth radius in kilometers for the spherical distance model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

/// Haversine great-circle distance between two coordinates, in kilometers.
///
/// Non-finite inputs propagate through to a non-finite result rather than
/// being clamped or rejected here. Callers that need validation do it at
/// their own boundary.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1) * DEGREES_TO_RADIANS;
    let d_lon = (lon2 - lon1) * DEGREES_TO_RADIANS;

    let a = (d_lat / 2.0).sin().powi(2)
        + (lat1 * DEGREES_TO_RADIANS).cos()
            * (lat2 * DEGREES_TO_RADIANS).cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Formats a coordinate pair as degrees/minutes/seconds, e.g.
/// `28°37'53.4"N, 77°13'0.1"E`.
///
/// Seconds are rendered with one decimal place. Hemisphere letters follow
/// the sign of each component, with zero treated as N/E.
#[must_use]
pub fn format_dms(lat: f64, lon: f64) -> String {
    format!("{}, {}", dms(lat, 'N', 'S'), dms(lon, 'E', 'W'))
}

fn dms(value: f64, positive: char, negative: char) -> String {
    let absolute = value.abs();
    let degrees = absolute.floor();
    let minutes_full = (absolute - degrees) * 60.0;
    let minutes = minutes_full.floor();
    let seconds = (minutes_full - minutes) * 60.0;
    let direction = if value >= 0.0 { positive } else { negative };
    format!("{degrees:.0}°{minutes:.0}'{seconds:.1}\"{direction}")
}
