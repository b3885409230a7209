//! Context feature extraction from recent conversation history.
//!
//! Some rules need more than the current message to fire correctly: a bare
//! number is only a pain-scale answer if pain came up recently. This module
//! derives those simple boolean features from the trailing window of user
//! turns. Features are recomputed fresh on every incoming turn and never
//! cached across turns.

use crate::session::Session;

/// Keywords whose presence in a recent user turn marks pain as discussed.
const PAIN_KEYWORDS: &[&str] = &["pain", "hurt"];

/// Keywords whose presence in a recent user turn marks mood as discussed.
const MOOD_KEYWORDS: &[&str] = &["sad", "stress", "anxious"];

/// A snapshot of context signals computed from recent history.
///
/// Computed per incoming turn from the trailing window of user turns, before
/// the new turn is appended. An empty session yields all features false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextFeatures {
    /// Pain was mentioned in one of the recent user turns.
    pub recent_pain: bool,
    /// Mood distress was mentioned in one of the recent user turns.
    pub recent_mood: bool,
    /// The session already has at least one prior user turn.
    pub is_follow_up: bool,
}

impl ContextFeatures {
    /// Extracts context features from the last `window_size` user turns of
    /// the session. Pure function of the window contents; no side effects.
    pub fn extract(session: &Session, window_size: usize) -> Self {
        let recent: Vec<String> = session
            .recent_user_turns(window_size)
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect();

        let contains_any =
            |keywords: &[&str]| recent.iter().any(|text| keywords.iter().any(|k| text.contains(k)));

        Self {
            recent_pain: contains_any(PAIN_KEYWORDS),
            recent_mood: contains_any(MOOD_KEYWORDS),
            is_follow_up: !recent.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_yields_all_false() {
        let session = Session::new("s-1");
        let features = ContextFeatures::extract(&session, 3);
        assert_eq!(features, ContextFeatures::default());
    }

    #[test]
    fn test_pain_mention_detected_case_insensitive() {
        let mut session = Session::new("s-2");
        session.append_user("I have PAIN in my knee");

        let features = ContextFeatures::extract(&session, 3);
        assert!(features.recent_pain);
        assert!(!features.recent_mood);
        assert!(features.is_follow_up);
    }

    #[test]
    fn test_mood_mention_detected() {
        let mut session = Session::new("s-3");
        session.append_user("I feel very stressed lately");

        let features = ContextFeatures::extract(&session, 3);
        assert!(features.recent_mood);
        assert!(!features.recent_pain);
    }

    #[test]
    fn test_mention_outside_window_ignored() {
        let mut session = Session::new("s-4");
        session.append_user("my back hurts");
        session.append_user("one");
        session.append_user("two");
        session.append_user("three");

        // "hurts" fell out of the 3-turn window
        let features = ContextFeatures::extract(&session, 3);
        assert!(!features.recent_pain);
        assert!(features.is_follow_up);
    }

    #[test]
    fn test_assistant_turns_do_not_count() {
        let mut session = Session::new("s-5");
        session.append_assistant("Does anything hurt?", None);

        let features = ContextFeatures::extract(&session, 3);
        assert!(!features.recent_pain);
        assert!(!features.is_follow_up);
    }
}
