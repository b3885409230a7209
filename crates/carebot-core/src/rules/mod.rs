//! Priority-ordered rule table and matching primitives.
//!
//! The response engine is a deterministic pattern-matcher: an ordered list of
//! rules is scanned top-to-bottom and the first match wins. Each rule is a
//! declarative record (matcher, optional context gate, response pool, optional
//! visual cue), so adding or reordering rules is a data change, not a
//! control-flow change. Table position is the rule's priority.
//!
//! # Module Structure
//!
//! - `table`: the full conversation rule table and default response pool
//!
//! The scanning primitive [`find_first_match`] takes the table as a parameter
//! so that other rule sets (e.g. the offline fallback lookup in
//! `carebot-interaction`) evaluate with the identical logic.

mod table;

pub use table::{DEFAULT_POOL, FOLLOW_UP_PREFIX, RULE_TABLE};

use crate::context::ContextFeatures;
use crate::session::VisualCue;
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid integer regex"));

/// A boolean gate drawn from [`ContextFeatures`].
///
/// A gated rule only fires when the named feature is true for the current
/// turn. This is how a bare number is interpreted as a pain-scale answer
/// only when pain was recently discussed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextGate {
    /// Requires `recent_pain` to be true.
    RecentPain,
    /// Requires `recent_mood` to be true.
    RecentMood,
}

impl ContextGate {
    fn is_open(&self, features: &ContextFeatures) -> bool {
        match self {
            ContextGate::RecentPain => features.recent_pain,
            ContextGate::RecentMood => features.recent_mood,
        }
    }
}

/// The matching predicate of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatcher {
    /// Case-insensitive substring containment, OR-ed across synonyms.
    /// Keywords must be stored lowercase; the input is normalized before
    /// matching.
    Keyword(&'static [&'static str]),
    /// Extracts the first integer literal in the text and matches iff it
    /// falls within `min..=max`. Zero or no integer falls through to later
    /// rules. Severity tier boundaries (8 and 5) are contractual.
    ScaleRange { min: u64, max: u64 },
}

/// One entry in a priority-ordered rule table.
///
/// Rules are static, process-wide, read-only configuration data. Priority is
/// the rule's position in its table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable name for logging and tests.
    pub name: &'static str,
    /// The matching predicate.
    pub matcher: RuleMatcher,
    /// Optional context gate; the rule only fires when the gate is open.
    pub gate: Option<ContextGate>,
    /// Non-empty pool of candidate responses; one is picked at random.
    pub pool: &'static [&'static str],
    /// Visual cue attached to whichever pool member is chosen.
    pub visual: Option<VisualCue>,
}

impl Rule {
    /// Returns true if this rule fires for the given normalized text and
    /// feature snapshot. Never mutates, never errors.
    pub fn matches(&self, normalized_text: &str, features: &ContextFeatures) -> bool {
        if let Some(gate) = &self.gate {
            if !gate.is_open(features) {
                return false;
            }
        }

        match self.matcher {
            RuleMatcher::Keyword(keywords) => {
                keywords.iter().any(|k| normalized_text.contains(k))
            }
            RuleMatcher::ScaleRange { min, max } => first_integer(normalized_text)
                .map(|n| n >= min && n <= max)
                .unwrap_or(false),
        }
    }
}

/// Normalizes raw user text for matching: trimmed and lower-cased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Extracts the first integer literal in the text, if any.
///
/// A digit run too long for `u64` saturates to `u64::MAX`: an absurdly large
/// number still reads as a very high value, not as no number at all.
pub fn first_integer(text: &str) -> Option<u64> {
    let m = INTEGER_RE.find(text)?;
    Some(m.as_str().parse().unwrap_or(u64::MAX))
}

/// Scans the table in priority order and returns the first matching rule.
///
/// "No match" is a normal, expected outcome handled by the caller via the
/// default pool, not an error. Matching is deterministic: identical text and
/// features select the identical rule on every call, in every session.
pub fn find_first_match<'a>(
    table: &'a [Rule],
    normalized_text: &str,
    features: &ContextFeatures,
) -> Option<&'a Rule> {
    table.iter().find(|rule| rule.matches(normalized_text, features))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello THERE  "), "hello there");
    }

    #[test]
    fn test_first_integer() {
        assert_eq!(first_integer("my pain is 7 today"), Some(7));
        assert_eq!(first_integer("8 or 9"), Some(8));
        assert_eq!(first_integer("none here"), None);
    }

    #[test]
    fn test_first_integer_saturates_on_overflow() {
        // 2^64 * 10: far past u64 but still a number, not a fall-through
        assert_eq!(
            first_integer("184467440737095516160"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn test_keyword_matcher_or_across_synonyms() {
        let rule = Rule {
            name: "greeting",
            matcher: RuleMatcher::Keyword(&["hello", "hi", "hey"]),
            gate: None,
            pool: &["Hello."],
            visual: None,
        };
        let features = ContextFeatures::default();
        assert!(rule.matches("hey there", &features));
        assert!(rule.matches("well hello", &features));
        assert!(!rule.matches("goodbye", &features));
    }

    #[test]
    fn test_gate_blocks_match() {
        let rule = Rule {
            name: "scale-urgent",
            matcher: RuleMatcher::ScaleRange { min: 8, max: u64::MAX },
            gate: Some(ContextGate::RecentPain),
            pool: &["Seek care."],
            visual: None,
        };
        let mut features = ContextFeatures::default();
        assert!(!rule.matches("9", &features));

        features.recent_pain = true;
        assert!(rule.matches("9", &features));
    }

    #[test]
    fn test_scale_range_bounds() {
        let moderate = Rule {
            name: "scale-moderate",
            matcher: RuleMatcher::ScaleRange { min: 5, max: 7 },
            gate: None,
            pool: &["Moderate."],
            visual: None,
        };
        let features = ContextFeatures::default();
        assert!(moderate.matches("5", &features));
        assert!(moderate.matches("7", &features));
        assert!(!moderate.matches("4", &features));
        assert!(!moderate.matches("8", &features));
        assert!(!moderate.matches("0", &features));
        assert!(!moderate.matches("no number", &features));
    }

    #[test]
    fn test_find_first_match_respects_order() {
        let table = [
            Rule {
                name: "first",
                matcher: RuleMatcher::Keyword(&["overlap"]),
                gate: None,
                pool: &["first"],
                visual: None,
            },
            Rule {
                name: "second",
                matcher: RuleMatcher::Keyword(&["overlap"]),
                gate: None,
                pool: &["second"],
                visual: None,
            },
        ];
        let features = ContextFeatures::default();
        let matched = find_first_match(&table, "overlap", &features).unwrap();
        assert_eq!(matched.name, "first");
    }

    #[test]
    fn test_find_first_match_none_is_not_an_error() {
        let features = ContextFeatures::default();
        assert!(find_first_match(&[], "anything", &features).is_none());
    }
}
