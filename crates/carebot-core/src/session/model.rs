//! Session domain model.
//!
//! This module contains the core Session entity that represents one ongoing
//! conversation in the application's domain layer.

use super::turn::{Speaker, Turn, VisualCue};
use serde::{Deserialize, Serialize};

/// Represents one ongoing conversation in the application's domain layer.
///
/// A session contains:
/// - The ordered, append-only transcript of turns
/// - Timestamps for creation
///
/// The session is the unit of conversational memory: no cross-session state
/// is shared or inferred, and sessions are transient (destroyed when the
/// conversation ends; there is no persistence requirement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// The ordered transcript. Insertion order is significant: it drives
    /// recency windows and transcript rendering.
    turns: Vec<Turn>,
}

impl Session {
    /// Creates a new empty session with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            turns: Vec::new(),
        }
    }

    /// Appends a user turn to the transcript.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Appends an assistant turn to the transcript.
    pub fn append_assistant(&mut self, text: impl Into<String>, visual: Option<VisualCue>) {
        self.turns.push(Turn::assistant(text, visual));
    }

    /// Returns the full transcript in insertion order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns up to the last `n` user turns in chronological order
    /// (oldest first among the returned subset). Assistant turns are skipped.
    pub fn recent_user_turns(&self, n: usize) -> Vec<&Turn> {
        let mut recent: Vec<&Turn> = self
            .turns
            .iter()
            .rev()
            .filter(|t| t.speaker == Speaker::User)
            .take(n)
            .collect();
        recent.reverse();
        recent
    }

    /// Returns the number of turns in the transcript.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut session = Session::new("s-1");
        session.append_user("I have pain in my knee");
        session.append_assistant("On a scale of 1 to 10?", Some(VisualCue::Caring));
        session.append_user("7");

        assert_eq!(session.len(), 3);
        assert_eq!(session.turns()[0].speaker, Speaker::User);
        assert_eq!(session.turns()[1].speaker, Speaker::Assistant);
        assert_eq!(session.turns()[2].text, "7");
    }

    #[test]
    fn test_recent_user_turns_chronological_most_recent_last() {
        let mut session = Session::new("s-2");
        session.append_user("first");
        session.append_assistant("reply", None);
        session.append_user("second");
        session.append_assistant("reply", None);
        session.append_user("third");
        session.append_user("fourth");

        let recent: Vec<&str> = session
            .recent_user_turns(3)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(recent, vec!["second", "third", "fourth"]);
    }

    #[test]
    fn test_recent_user_turns_fewer_than_requested() {
        let mut session = Session::new("s-3");
        session.append_user("only");

        let recent = session.recent_user_turns(3);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].text, "only");
    }

    #[test]
    fn test_recent_user_turns_empty_session() {
        let session = Session::new("s-4");
        assert!(session.recent_user_turns(3).is_empty());
        assert!(session.is_empty());
    }

    #[test]
    fn test_recent_user_turns_skips_assistant_turns() {
        let mut session = Session::new("s-5");
        session.append_user("hello");
        session.append_assistant("Hello.", Some(VisualCue::Wave));
        session.append_assistant("Anything else?", None);

        let recent = session.recent_user_turns(3);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].text, "hello");
    }
}
