//! Carebot core: a deterministic, rule-based conversational response engine.
//!
//! Given free-text user input and a short window of prior conversation turns,
//! the engine selects a canned response (optionally with a visual cue) by
//! scanning a priority-ordered rule table, first match wins. A few rules
//! consult recent history, e.g. a bare number only reads as a pain-scale
//! answer when pain was recently discussed. There is no natural-language
//! understanding and no machine learning here, by design: the engine is a
//! pattern-matcher with randomized response variety.

pub mod context;
pub mod engine;
pub mod error;
pub mod rules;
pub mod selector;
pub mod session;

// Re-export common types
pub use context::ContextFeatures;
pub use engine::ChatEngine;
pub use error::{CareError, Result};
pub use selector::{Reply, ResponseSelector, SeededSelector, UniformSelector};
pub use session::{Session, Speaker, Turn, VisualCue};
