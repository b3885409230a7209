//! Session domain module.
//!
//! This module contains all session-related domain models: the append-only
//! transcript and the turn types it is built from.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `turn`: Conversation turn types (`Speaker`, `Turn`, `VisualCue`)
//!
//! # Usage
//!
//! ```ignore
//! use carebot_core::session::{Session, Speaker, Turn, VisualCue};
//! ```

mod model;
mod turn;

// Re-export public API
pub use model::Session;
pub use turn::{Speaker, Turn, VisualCue};
