#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! SOS and location-share message composition.
//!
//! This crate only builds strings: alert message bodies, WhatsApp deep
//! links, and dialer URIs. Launching them belongs to the caller, which
//! keeps everything here pure and testable.

use sakhi_geo::format_dms;

/// Google Maps link for a coordinate pair.
#[must_use]
pub fn maps_link(latitude: f64, longitude: f64) -> String {
    format!("https://maps.google.com/?q={latitude},{longitude}")
}

/// Emergency alert body sent to the primary contact.
#[must_use]
pub fn sos_message(address: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "⚠️ CRITICAL ALERT — I NEED HELP IMMEDIATELY !!!\n\nPlease don't ignore this. I'm in trouble and sharing my live location.\n\n📍 Address: {address}\n📌 Coordinates: {dms}\n🗺️ Live Location: {link}",
        dms = format_dms(latitude, longitude),
        link = maps_link(latitude, longitude),
    )
}

/// Non-emergency location update body for trusted contacts.
#[must_use]
pub fn location_share_message(address: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "Location Share\n\nI'm sharing my current location with you.\n\n📍 Address: {address}\n📌 Coordinates: {dms}\n🗺️ Live Location: {link}",
        dms = format_dms(latitude, longitude),
        link = maps_link(latitude, longitude),
    )
}

/// WhatsApp deep link that opens a chat with the message prefilled.
///
/// The message body is percent-encoded; the phone number is passed
/// through as given (country code plus digits, no `+`).
#[must_use]
pub fn whatsapp_send_url(phone: &str, message: &str) -> String {
    format!(
        "whatsapp://send?phone={phone}&text={}",
        percent_encode(message)
    )
}

/// Dialer URI for the given number.
#[must_use]
pub fn dial_url(number: &str) -> String {
    format!("tel:{number}")
}

/// Percent-encoding for URL query values.
///
/// Everything outside the unreserved set is encoded byte-wise, so
/// newlines, emoji, and separators survive the trip through a deep link.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
