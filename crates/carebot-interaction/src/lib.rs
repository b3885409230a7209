//! Carebot interaction layer: the external AI boundary.
//!
//! This crate owns the one asynchronous boundary in the system: the optional
//! Gemini completion call used by the health-check flow. The core chat engine
//! never touches the network. On any upstream failure the flow degrades to a
//! static keyword-matched fallback built on the core engine's own rule
//! matching primitive.

pub mod client;
pub mod config;
pub mod fallback;
pub mod health_check;

// Re-export public API
pub use client::{ClientError, CompletionAgent, GeminiClient};
pub use config::GeminiSettings;
pub use fallback::fallback_response;
pub use health_check::{HealthCheckService, HealthProfile, ProfileError};
