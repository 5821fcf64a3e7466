//! Canned response rules and distress keywords from the embedded catalog.
//!
//! The rule file is baked in at compile time via [`include_str!`] and
//! parsed once on first access, like the zone catalog in `sakhi_zones`.

use std::sync::LazyLock;

use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumString};

const RESPONSES_TOML: &str = include_str!("../rules/responses.toml");

/// Classification tag for a canned response rule.
///
/// Informational only: the matcher never branches on it, but callers can
/// use it to style or prioritize replies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleKind {
    General,
    Emergency,
    SafetyQuery,
    Route,
}

/// A keyword-triggered canned response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRule {
    /// Lowercase substring phrases that activate this rule, tried in order.
    pub triggers: Vec<String>,
    /// Reply text sent when the rule fires.
    pub response: String,
    /// Informational classification tag.
    pub kind: RuleKind,
}

#[derive(Debug, Deserialize)]
struct RuleCatalog {
    distress_keywords: Vec<String>,
    rules: Vec<ChatRule>,
}

static CATALOG: LazyLock<RuleCatalog> = LazyLock::new(|| {
    let catalog: RuleCatalog = toml::from_str(RESPONSES_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse responses.toml: {e}"));
    log::info!(
        "Loaded {} response rules and {} distress keywords",
        catalog.rules.len(),
        catalog.distress_keywords.len()
    );
    catalog
});

/// Returns the embedded response rules in their fixed order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (a compile-time guarantee in
/// practice, since the catalog ships inside the crate).
#[must_use]
pub fn bundled_rules() -> &'static [ChatRule] {
    &CATALOG.rules
}

/// Returns the embedded distress keywords.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed.
#[must_use]
pub fn bundled_distress_keywords() -> &'static [String] {
    &CATALOG.distress_keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_RULE_COUNT: usize = 13;
    const EXPECTED_KEYWORD_COUNT: usize = 13;

    #[test]
    fn loads_all_rules_and_keywords() {
        assert_eq!(bundled_rules().len(), EXPECTED_RULE_COUNT);
        assert_eq!(bundled_distress_keywords().len(), EXPECTED_KEYWORD_COUNT);
    }

    #[test]
    fn triggers_and_keywords_are_lowercase_and_non_empty() {
        for rule in bundled_rules() {
            assert!(!rule.triggers.is_empty(), "rule has no triggers");
            assert!(!rule.response.is_empty(), "rule has no response");
            for trigger in &rule.triggers {
                assert!(!trigger.is_empty(), "empty trigger");
                assert_eq!(
                    trigger,
                    &trigger.to_lowercase(),
                    "trigger {trigger:?} is not lowercase"
                );
            }
        }
        for keyword in bundled_distress_keywords() {
            assert!(!keyword.is_empty(), "empty distress keyword");
            assert_eq!(
                keyword,
                &keyword.to_lowercase(),
                "keyword {keyword:?} is not lowercase"
            );
        }
    }

    #[test]
    fn first_rule_is_the_greeting() {
        let first = &bundled_rules()[0];
        assert!(first.triggers.contains(&"hello".to_string()));
        assert_eq!(first.kind, RuleKind::General);
    }

    #[test]
    fn rule_kind_parses_from_catalog_spelling() {
        assert_eq!(
            "safety_query".parse::<RuleKind>().unwrap(),
            RuleKind::SafetyQuery
        );
        assert_eq!(RuleKind::Emergency.to_string(), "emergency");
    }
}
