#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Keyword-matched safety assistant.
//!
//! Three layers, each usable on its own: [`ResponseMatcher`] does pure
//! substring matching over the embedded rule catalog, [`ProximityWatch`]
//! decides when entering an unsafe zone warrants a warning, and
//! [`ChatSession`] ties both to a transcript with contextual replies.
//!
//! Matching is deliberately plain substring containment over lowercased
//! text. "unhelpful" triggers the `help` keyword; that looseness errs on
//! the side of responding to distress and is kept intentionally.

mod proximity;
mod rules;
mod session;

pub use proximity::{DEFAULT_WARN_RADIUS_KM, ProximityWatch};
pub use rules::{ChatRule, RuleKind, bundled_distress_keywords, bundled_rules};
pub use session::{ChatSession, EntryKind, Speaker, TranscriptEntry};

/// Substring matcher over an ordered rule catalog and a distress keyword
/// set.
///
/// Rules are tried in catalog order and the first rule with any
/// contained trigger wins, so catalog order is the tie-break.
#[derive(Debug, Clone, Copy)]
pub struct ResponseMatcher<'a> {
    rules: &'a [ChatRule],
    distress_keywords: &'a [String],
}

impl<'a> ResponseMatcher<'a> {
    /// Creates a matcher over the given rules and keywords.
    #[must_use]
    pub const fn new(rules: &'a [ChatRule], distress_keywords: &'a [String]) -> Self {
        Self {
            rules,
            distress_keywords,
        }
    }

    /// Matcher over the embedded rule catalog.
    #[must_use]
    pub fn bundled() -> ResponseMatcher<'static> {
        ResponseMatcher::new(rules::bundled_rules(), rules::bundled_distress_keywords())
    }

    /// Whether any distress keyword occurs in the text.
    ///
    /// Case-insensitive substring containment; empty input never matches.
    #[must_use]
    pub fn detect_distress(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.distress_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// Returns the first rule with any trigger contained in the text, or
    /// `None` when nothing matches (the caller supplies its own fallback).
    #[must_use]
    pub fn find_best_response(&self, text: &str) -> Option<&'a ChatRule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|rule| {
            rule.triggers
                .iter()
                .any(|trigger| lowered.contains(trigger.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ResponseMatcher<'static> {
        ResponseMatcher::bundled()
    }

    #[test]
    fn greeting_matches_the_first_rule() {
        let rule = matcher().find_best_response("Hello there!").unwrap();
        assert_eq!(rule.kind, RuleKind::General);
        assert!(rule.response.starts_with("Hello! I'm your Women's Safety Assistant."));
    }

    #[test]
    fn earlier_rule_wins_when_several_match() {
        // "hello" (rule 1) and "police" (rule 6) both match; catalog
        // order decides.
        let rule = matcher().find_best_response("hello, I need the police").unwrap();
        assert!(rule.triggers.contains(&"hello".to_string()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(matcher().detect_distress("HELP ME"));
        assert!(matcher().find_best_response("THANK YOU").is_some());
    }

    #[test]
    fn matching_is_substring_not_word_boundary() {
        // "unhelpful" contains "help"; looseness is intentional.
        assert!(matcher().detect_distress("that was unhelpful"));
    }

    #[test]
    fn multi_word_distress_phrases_match() {
        assert!(matcher().detect_distress("I don't feel safe here"));
        assert!(matcher().detect_distress("someone is following me"));
    }

    #[test]
    fn calm_text_is_not_distress() {
        assert!(!matcher().detect_distress("what a lovely day"));
        assert!(!matcher().detect_distress("see you tomorrow"));
    }

    #[test]
    fn empty_input_matches_nothing() {
        assert!(!matcher().detect_distress(""));
        assert!(matcher().find_best_response("").is_none());
    }

    #[test]
    fn unmatched_input_returns_none() {
        assert!(matcher().find_best_response("asdf qwerty zzz").is_none());
    }

    #[test]
    fn ride_queries_match_the_taxi_rule() {
        let rule = matcher().find_best_response("i need a taxi").unwrap();
        assert!(rule.triggers.contains(&"taxi".to_string()));
        assert_eq!(rule.kind, RuleKind::General);
    }
}
