//! The conversational response engine.
//!
//! `ChatEngine` is the single entry point the surrounding UI or CLI needs:
//! submit raw user text for a session, receive the chosen reply. One turn at
//! a time per session; independent sessions may be driven concurrently with
//! no shared mutable state beyond the static, read-only rule table.

use crate::context::ContextFeatures;
use crate::error::{CareError, Result};
use crate::rules::{self, DEFAULT_POOL, FOLLOW_UP_PREFIX, RULE_TABLE};
use crate::selector::{self, Reply, ResponseSelector, UniformSelector};
use crate::session::{Session, Turn, VisualCue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Number of trailing user turns consulted for context features.
const CONTEXT_WINDOW: usize = 3;

/// Per-turn processing phase for a session.
///
/// `submit` moves Idle to AwaitingResponse, runs the turn, and returns to
/// Idle. A submission while AwaitingResponse is rejected so that context
/// features are always computed from a stable history snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnPhase {
    Idle,
    AwaitingResponse,
}

struct SessionState {
    session: Session,
    phase: TurnPhase,
}

/// The rule-based conversational response engine.
///
/// Holds the session registry and the injected response selector. The rule
/// table itself is static configuration shared by all engines.
pub struct ChatEngine {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionState>>>>,
    selector: Box<dyn ResponseSelector>,
    window_size: usize,
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new(Box::new(UniformSelector))
    }
}

impl ChatEngine {
    /// Creates an engine with the given response selector.
    ///
    /// Production callers use [`UniformSelector`]; tests inject a
    /// deterministic selector to assert exact output.
    pub fn new(selector: Box<dyn ResponseSelector>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            selector,
            window_size: CONTEXT_WINDOW,
        }
    }

    /// Submits one user turn and returns the assistant's reply.
    ///
    /// The turn cycle is: validate input, snapshot context features from the
    /// history so far, scan the rule table, pick from the matched pool (or
    /// the default pool), then append both turns. The session is created on
    /// first use.
    ///
    /// # Errors
    ///
    /// - [`CareError::EmptyInput`] if the text is empty or whitespace-only
    /// - [`CareError::TurnInProgress`] if another turn is being processed for
    ///   this session; recoverable by retry once the prior turn completes
    pub fn respond(&self, session_id: &str, user_text: &str) -> Result<Reply> {
        if user_text.trim().is_empty() {
            return Err(CareError::EmptyInput);
        }

        let entry = self.entry(session_id);
        let mut state = entry
            .try_lock()
            .map_err(|_| CareError::turn_in_progress(session_id))?;
        if state.phase != TurnPhase::Idle {
            return Err(CareError::turn_in_progress(session_id));
        }
        state.phase = TurnPhase::AwaitingResponse;

        // Features come from the snapshot BEFORE this turn is appended: a
        // bare "7" right after "I have pain" must see the pain mention.
        let features = ContextFeatures::extract(&state.session, self.window_size);
        let normalized = rules::normalize(user_text);
        let reply = self.evaluate(&normalized, &features);

        state.session.append_user(user_text);
        state
            .session
            .append_assistant(reply.text.clone(), reply.visual);
        state.phase = TurnPhase::Idle;

        Ok(reply)
    }

    /// Returns a copy of the session's transcript for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`CareError::NotFound`] if the session does not exist.
    pub fn transcript(&self, session_id: &str) -> Result<Vec<Turn>> {
        let sessions = self.sessions.read().expect("session registry poisoned");
        let entry = sessions
            .get(session_id)
            .ok_or_else(|| CareError::not_found("session", session_id))?;
        let state = entry.lock().expect("session state poisoned");
        Ok(state.session.turns().to_vec())
    }

    /// Seeds a session with an opening assistant turn (e.g. the companion's
    /// greeting shown before the user has typed anything).
    pub fn seed_assistant(&self, session_id: &str, text: &str, visual: Option<VisualCue>) {
        let entry = self.entry(session_id);
        let mut state = entry.lock().expect("session state poisoned");
        state.session.append_assistant(text, visual);
    }

    fn entry(&self, session_id: &str) -> Arc<Mutex<SessionState>> {
        {
            let sessions = self.sessions.read().expect("session registry poisoned");
            if let Some(entry) = sessions.get(session_id) {
                return entry.clone();
            }
        }

        let mut sessions = self.sessions.write().expect("session registry poisoned");
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(SessionState {
                    session: Session::new(session_id),
                    phase: TurnPhase::Idle,
                }))
            })
            .clone()
    }

    fn evaluate(&self, normalized: &str, features: &ContextFeatures) -> Reply {
        match rules::find_first_match(RULE_TABLE, normalized, features) {
            Some(rule) => {
                tracing::debug!(rule = rule.name, "rule matched");
                selector::select(rule.pool, rule.visual, self.selector.as_ref())
            }
            None => {
                tracing::debug!(follow_up = features.is_follow_up, "no rule matched, using default pool");
                let mut reply = selector::select(DEFAULT_POOL, None, self.selector.as_ref());
                if features.is_follow_up {
                    reply.text = format!("{}{}", FOLLOW_UP_PREFIX, reply.text);
                }
                reply
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SeededSelector;
    use crate::session::Speaker;

    fn engine() -> ChatEngine {
        ChatEngine::new(Box::new(SeededSelector::new(7)))
    }

    #[test]
    fn test_greeting_scenario() {
        let engine = engine();
        let reply = engine.respond("s-1", "hello there").unwrap();

        assert_eq!(reply.visual, Some(VisualCue::Wave));
        let greeting_rule = RULE_TABLE.iter().find(|r| r.name == "greeting").unwrap();
        assert!(greeting_rule.pool.contains(&reply.text.as_str()));
    }

    #[test]
    fn test_empty_input_rejected_before_matching() {
        let engine = engine();
        assert_eq!(engine.respond("s-1", "   "), Err(CareError::EmptyInput));
        assert_eq!(engine.respond("s-1", ""), Err(CareError::EmptyInput));
        // Nothing was appended, not even the session itself
        assert!(engine.transcript("s-1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_pain_then_scale_answer_moderate_tier() {
        let engine = engine();
        engine.respond("s-1", "I have pain in my knee").unwrap();
        let reply = engine.respond("s-1", "7").unwrap();

        assert_eq!(
            reply.text,
            "Moderate pain detected. I recommend rest, appropriate pain management, and monitoring symptoms. If pain persists or worsens, consult a healthcare professional."
        );
        assert_eq!(reply.visual, Some(VisualCue::Caring));
    }

    #[test]
    fn test_bare_number_without_history_uses_default_without_prefix() {
        let engine = engine();
        let reply = engine.respond("s-new", "7").unwrap();

        // First user turn: is_follow_up is false, so no prefix
        assert!(!reply.text.starts_with(FOLLOW_UP_PREFIX));
        assert!(DEFAULT_POOL.contains(&reply.text.as_str()));
        assert_eq!(reply.visual, None);
    }

    #[test]
    fn test_follow_up_prefix_on_unmatched_second_turn() {
        let engine = engine();
        engine.respond("s-1", "zzz qqq").unwrap();
        let reply = engine.respond("s-1", "zzz qqq").unwrap();

        assert!(reply.text.starts_with(FOLLOW_UP_PREFIX));
        let stripped = &reply.text[FOLLOW_UP_PREFIX.len()..];
        assert!(DEFAULT_POOL.contains(&stripped));
    }

    #[test]
    fn test_urgent_tier_reply() {
        let engine = engine();
        engine.respond("s-1", "my shoulder hurts").unwrap();
        let reply = engine.respond("s-1", "9").unwrap();

        assert!(reply.text.contains("immediate medical attention"));
    }

    #[test]
    fn test_transcript_round_trip() {
        let engine = engine();
        engine.respond("s-1", "hello").unwrap();
        engine.respond("s-1", "I feel tired").unwrap();

        let transcript = engine.transcript("s-1").unwrap();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].speaker, Speaker::User);
        assert_eq!(transcript[0].text, "hello");
        assert_eq!(transcript[1].speaker, Speaker::Assistant);
        assert_eq!(transcript[2].text, "I feel tired");
    }

    #[test]
    fn test_sessions_are_independent() {
        let engine = engine();
        engine.respond("a", "I have pain everywhere").unwrap();

        // Session "b" has no pain context; the bare number falls through
        let reply = engine.respond("b", "8").unwrap();
        assert!(DEFAULT_POOL.contains(&reply.text.as_str()));
    }

    #[test]
    fn test_concurrent_submission_rejected() {
        let engine = engine();
        engine.respond("s-1", "hello").unwrap();

        // Simulate an in-flight turn by holding the session lock
        let entry = engine.entry("s-1");
        let _guard = entry.lock().unwrap();

        let err = engine.respond("s-1", "hi again").unwrap_err();
        assert!(err.is_turn_in_progress());
    }

    #[test]
    fn test_seed_assistant_does_not_affect_features() {
        let engine = engine();
        engine.seed_assistant(
            "s-1",
            "Hello. I am Baymax, your personal healthcare companion.",
            Some(VisualCue::Wave),
        );

        // Assistant turns are not user turns: the next submission is still
        // treated as the first user turn
        let reply = engine.respond("s-1", "qqq zzz").unwrap();
        assert!(!reply.text.starts_with(FOLLOW_UP_PREFIX));
    }
}
