//! Stateful chat session: transcript, contextual replies, and warnings.
//!
//! The session glues the pure pieces together. Matching itself lives in
//! [`ResponseMatcher`], zone lookup in `sakhi_zones`, and the warning
//! policy in [`ProximityWatch`]; everything here is deterministic given
//! the transcript, the catalogs, and the supplied coordinates.

use sakhi_zones::ZoneIndex;
use sakhi_zones_models::SafetyZone;

use crate::{ProximityWatch, ResponseMatcher};

const GREETING: &str = "Hello! I'm your Women's Safety Assistant. I'm here to protect you and help you stay safe. You can:\n\n• Ask about safe routes\n• Check safety of any area\n• Get emergency help\n• Find nearby police stations\n\nHow can I help you today?";

const DISTRESS_MENU: &str = "🚨 DISTRESS DETECTED! Stay calm, I'm here to help.\n\nImmediate actions available:\n• Call Emergency Services (112)\n• Call Police (100)\n• Call Women's Helpline (181)\n• View Safe Route on Map\n\nWhat would you like me to do?";

const NO_LOCATION: &str = "I don't have access to your location. You can:\n1. Enable location permission in your settings\n2. Tell me the city/area name you want to check\n\nWhich city would you like safety information for?";

const MAP_OVERVIEW: &str = "I can show you a safety map with:\n• Safe zones (marked in green)\n• Moderate zones (marked in yellow)\n• Unsafe zones (marked in red)\n• Your current location\n• Nearby police stations\n\nYou can view the map in the main screen.";

const FALLBACK: &str = "I'm here to help keep you safe. You can ask me about:\n• Safe routes and directions\n• Safety information for any area\n• Nearest police stations\n• Emergency assistance\n\nWhat would you like to know?";

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// What kind of entry a transcript line is.
///
/// Warnings carry their own kind so repeat suppression can check the
/// latest entry instead of sniffing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Ordinary conversation, either side.
    Chat,
    /// The fixed emergency menu appended when distress is detected.
    DistressAlert,
    /// An unsafe-zone warning appended by a location update.
    ProximityWarning,
}

/// One line of the session transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub kind: EntryKind,
    pub text: String,
}

/// A chat session seeded with the greeting message.
///
/// Location is optional for the whole session lifetime: queries that
/// need it fall back to asking for a city instead.
#[derive(Debug, Clone)]
pub struct ChatSession<'a> {
    matcher: ResponseMatcher<'a>,
    index: ZoneIndex<'a>,
    watch: ProximityWatch,
    location: Option<(f64, f64)>,
    nearest: Option<&'a SafetyZone>,
    transcript: Vec<TranscriptEntry>,
}

impl<'a> ChatSession<'a> {
    /// Creates a session over the given matcher, index, and warning policy.
    #[must_use]
    pub fn new(matcher: ResponseMatcher<'a>, index: ZoneIndex<'a>, watch: ProximityWatch) -> Self {
        let transcript = vec![TranscriptEntry {
            speaker: Speaker::Assistant,
            kind: EntryKind::Chat,
            text: GREETING.to_string(),
        }];
        Self {
            matcher,
            index,
            watch,
            location: None,
            nearest: None,
            transcript,
        }
    }

    /// Session over the embedded catalogs with the default warning radius.
    #[must_use]
    pub fn bundled() -> ChatSession<'static> {
        ChatSession::new(
            ResponseMatcher::bundled(),
            ZoneIndex::bundled(),
            ProximityWatch::default(),
        )
    }

    /// The transcript so far, oldest first. Never empty.
    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// The zone nearest to the last reported location, if any.
    #[must_use]
    pub const fn nearest_zone(&self) -> Option<&'a SafetyZone> {
        self.nearest
    }

    /// The last reported location as `(latitude, longitude)`.
    #[must_use]
    pub const fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Records a new position and recomputes the nearest zone.
    ///
    /// Returns the proximity warning appended to the transcript when the
    /// nearest zone is unsafe and within the warning radius. A warning is
    /// suppressed while the latest transcript entry is already one, so a
    /// stationary user is warned once rather than on every update.
    pub fn update_location(&mut self, latitude: f64, longitude: f64) -> Option<&TranscriptEntry> {
        self.location = Some((latitude, longitude));
        self.nearest = self.index.nearest_zone(latitude, longitude);

        let zone = self.nearest?;
        let distance = self.watch.assess(zone, latitude, longitude)?;
        if self.latest_is_warning() {
            return None;
        }

        log::debug!("entering unsafe zone {} ({distance:.3} km away)", zone.id);
        Some(self.push_assistant(EntryKind::ProximityWarning, proximity_warning(zone)))
    }

    /// Submits user input and appends the assistant's reply.
    ///
    /// Returns the reply entry, or `None` for blank input (which is
    /// dropped without touching the transcript). Distress detection runs
    /// first and short-circuits to the emergency menu; contextual
    /// branches and canned rules handle the rest.
    pub fn submit(&mut self, text: &str) -> Option<&TranscriptEntry> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.push(Speaker::User, EntryKind::Chat, text.to_string());

        if self.matcher.detect_distress(text) {
            return Some(self.push_assistant(EntryKind::DistressAlert, DISTRESS_MENU.to_string()));
        }

        let lowered = text.to_lowercase();
        let reply = if lowered.contains("safe")
            && (lowered.contains("area") || lowered.contains("location"))
        {
            match (self.location, self.nearest) {
                (Some(_), Some(zone)) => zone_summary(zone),
                _ => NO_LOCATION.to_string(),
            }
        } else if lowered.contains("route")
            || lowered.contains("map")
            || lowered.contains("navigate")
        {
            MAP_OVERVIEW.to_string()
        } else if lowered.contains("police") || lowered.contains("station") {
            // Without a location fix the canned police rule still applies.
            self.nearest
                .map_or_else(|| self.canned_or_fallback(text), police_info)
        } else {
            self.canned_or_fallback(text)
        };

        Some(self.push_assistant(EntryKind::Chat, reply))
    }

    fn canned_or_fallback(&self, text: &str) -> String {
        self.matcher
            .find_best_response(text)
            .map_or_else(|| FALLBACK.to_string(), |rule| rule.response.clone())
    }

    fn latest_is_warning(&self) -> bool {
        self.transcript
            .last()
            .is_some_and(|entry| entry.kind == EntryKind::ProximityWarning)
    }

    fn push(&mut self, speaker: Speaker, kind: EntryKind, text: String) {
        self.transcript.push(TranscriptEntry {
            speaker,
            kind,
            text,
        });
    }

    fn push_assistant(&mut self, kind: EntryKind, text: String) -> &TranscriptEntry {
        self.push(Speaker::Assistant, kind, text);
        &self.transcript[self.transcript.len() - 1]
    }
}

fn zone_summary(zone: &SafetyZone) -> String {
    format!(
        "Based on your current location, you are near {} in {}.\n\nSafety Status: {}\nSafety Score: {}/10\nLighting: {}/10\nFoot Traffic: {}/10\n\nNearest Police Station: {} ({}km)\n\nAdvice: {}\n\nWould you like to see this on a map?",
        zone.area,
        zone.city,
        zone.safety_label,
        zone.safety_score,
        zone.lighting_score,
        zone.foot_traffic_score,
        zone.nearest_police_station,
        zone.police_station_distance,
        zone.advice
    )
}

fn police_info(zone: &SafetyZone) -> String {
    format!(
        "The nearest police station to you is:\n\n{}\nDistance: {}km away\n\nWould you like me to show you the location on the map or call emergency services?",
        zone.nearest_police_station, zone.police_station_distance
    )
}

fn proximity_warning(zone: &SafetyZone) -> String {
    format!(
        "⚠️ WARNING: You are entering an unsafe area ({}). This area has a safety score of {}/10.\n\nNearest police station: {} ({}km)\n\nAdvice: {}\n\nWould you like me to call emergency services or show you a safer route?",
        zone.area,
        zone.safety_score,
        zone.nearest_police_station,
        zone.police_station_distance,
        zone.advice
    )
}
