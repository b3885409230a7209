//! Conversation turn types.
//!
//! This module contains types for representing turns in a conversation,
//! including speakers, turn content, and the visual cues some assistant
//! replies carry.

use serde::{Deserialize, Serialize};

/// Represents the speaker of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// Turn from the user.
    User,
    /// Turn from the assistant.
    Assistant,
}

/// A visual cue asset attached to some assistant replies.
///
/// The presentation layer maps each cue to an animation asset; the engine
/// only carries the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualCue {
    /// Waving greeting animation.
    Wave,
    /// Thumbs-up / approval animation.
    ThumbsUp,
    /// Caring / attentive animation.
    Caring,
}

impl VisualCue {
    /// Returns the asset path the presentation layer renders for this cue.
    pub fn asset_path(&self) -> &'static str {
        match self {
            VisualCue::Wave => "/images/baymax-hello.gif",
            VisualCue::ThumbsUp => "/images/baymax-thumbs-up.gif",
            VisualCue::Caring => "/images/baymax-caring.gif",
        }
    }
}

/// A single turn in a conversation transcript.
///
/// Each turn has a speaker, text content, and optionally a visual cue
/// (assistant turns only). Turns are immutable once created: the transcript
/// is append-only and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who produced this turn.
    pub speaker: Speaker,
    /// The text content of the turn.
    pub text: String,
    /// Visual cue attached to the turn, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<VisualCue>,
}

impl Turn {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            visual: None,
        }
    }

    /// Creates an assistant turn with an optional visual cue.
    pub fn assistant(text: impl Into<String>, visual: Option<VisualCue>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            visual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("hello");
        assert_eq!(user.speaker, Speaker::User);
        assert_eq!(user.visual, None);

        let assistant = Turn::assistant("Hello.", Some(VisualCue::Wave));
        assert_eq!(assistant.speaker, Speaker::Assistant);
        assert_eq!(assistant.visual, Some(VisualCue::Wave));
    }

    #[test]
    fn test_visual_cue_asset_paths() {
        assert_eq!(VisualCue::Wave.asset_path(), "/images/baymax-hello.gif");
        assert_eq!(
            VisualCue::ThumbsUp.asset_path(),
            "/images/baymax-thumbs-up.gif"
        );
        assert_eq!(VisualCue::Caring.asset_path(), "/images/baymax-caring.gif");
    }
}
