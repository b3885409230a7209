//! The AI-assisted health-check flow.
//!
//! The user fills in a short profile (name, age, sleep hours, stress level)
//! and receives personalized recommendations from the external AI, with
//! follow-up questions answered in the same profile context. Every upstream
//! failure is absorbed locally: the caller always receives coherent text,
//! never a raw error.

use crate::client::CompletionAgent;
use crate::fallback;
use carebot_core::selector::ResponseSelector;
use thiserror::Error;

/// Validation errors for the health-check profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Age must be between 1 and 120, got {0}")]
    AgeOutOfRange(u32),
    #[error("Stress level must be between 1 and 10, got {0}")]
    StressOutOfRange(u8),
}

/// The user's health-check profile.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthProfile {
    pub name: String,
    pub age: u32,
    /// Hours of sleep per night (form range 4.0 to 12.0, default 7.0).
    pub sleep_hours: f32,
    /// Self-reported stress level on a 1 to 10 scale (default 5).
    pub stress_level: u8,
}

impl HealthProfile {
    /// Creates a validated profile. Bounds match the intake form.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        sleep_hours: f32,
        stress_level: u8,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if !(1..=120).contains(&age) {
            return Err(ProfileError::AgeOutOfRange(age));
        }
        if !(1..=10).contains(&stress_level) {
            return Err(ProfileError::StressOutOfRange(stress_level));
        }
        Ok(Self {
            name,
            age,
            sleep_hours,
            stress_level,
        })
    }

    /// Builds the recommendation prompt sent after form submission.
    pub fn recommendation_prompt(&self) -> String {
        format!(
            "I'm a {age} year old person named {name}.\n\
             I sleep about {sleep} hours per night.\n\
             My stress level is {stress}/10.\n\
             Based on this information, provide me with 3-5 personalized health recommendations.\n\
             Format each recommendation with a title and a brief description.\n\
             Keep the tone friendly and supportive, like a healthcare companion.",
            age = self.age,
            name = self.name,
            sleep = self.sleep_hours,
            stress = self.stress_level,
        )
    }

    /// Builds the context-aware prompt for a follow-up question.
    pub fn follow_up_prompt(&self, question: &str) -> String {
        format!(
            "Context: I'm a {age} year old person named {name}.\n\
             I sleep about {sleep} hours per night.\n\
             My stress level is {stress}/10.\n\
             \n\
             I'm asking about: \"{question}\"\n\
             \n\
             Provide a helpful, accurate, and compassionate response as if you're a healthcare companion.\n\
             Keep your answer concise but informative. Focus on general wellness advice, not specific medical diagnoses.",
            age = self.age,
            name = self.name,
            sleep = self.sleep_hours,
            stress = self.stress_level,
        )
    }
}

/// Orchestrates the health-check conversation against a completion agent,
/// substituting the static fallback lookup whenever the agent fails.
pub struct HealthCheckService<A: CompletionAgent> {
    agent: A,
    selector: Box<dyn ResponseSelector>,
}

impl<A: CompletionAgent> HealthCheckService<A> {
    pub fn new(agent: A, selector: Box<dyn ResponseSelector>) -> Self {
        Self { agent, selector }
    }

    /// Generates initial recommendations for the profile.
    pub async fn recommendations(&self, profile: &HealthProfile) -> String {
        self.complete_or_fallback(&profile.recommendation_prompt())
            .await
    }

    /// Answers a follow-up question in the profile's context.
    pub async fn ask(&self, profile: &HealthProfile, question: &str) -> String {
        self.complete_or_fallback(&profile.follow_up_prompt(question))
            .await
    }

    /// Calls the agent; on any failure (timeout, non-success status,
    /// malformed payload) substitutes the keyword fallback for the same
    /// prompt. The upstream error is logged, never surfaced.
    async fn complete_or_fallback(&self, prompt: &str) -> String {
        match self.agent.complete(prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "completion failed, using fallback response");
                fallback::fallback_response(prompt, self.selector.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use async_trait::async_trait;
    use carebot_core::selector::SeededSelector;

    struct OkAgent;

    #[async_trait]
    impl CompletionAgent for OkAgent {
        async fn complete(&self, _prompt: &str) -> Result<String, ClientError> {
            Ok("upstream recommendations".to_string())
        }
    }

    struct FailingAgent;

    #[async_trait]
    impl CompletionAgent for FailingAgent {
        async fn complete(&self, _prompt: &str) -> Result<String, ClientError> {
            Err(ClientError::RequestFailed {
                message: "timed out".to_string(),
                is_retryable: true,
            })
        }
    }

    fn profile() -> HealthProfile {
        HealthProfile::new("Hiro", 14, 7.0, 5).unwrap()
    }

    #[test]
    fn test_profile_validation() {
        assert_eq!(
            HealthProfile::new("", 30, 7.0, 5),
            Err(ProfileError::EmptyName)
        );
        assert_eq!(
            HealthProfile::new("A", 0, 7.0, 5),
            Err(ProfileError::AgeOutOfRange(0))
        );
        assert_eq!(
            HealthProfile::new("A", 121, 7.0, 5),
            Err(ProfileError::AgeOutOfRange(121))
        );
        assert_eq!(
            HealthProfile::new("A", 30, 7.0, 11),
            Err(ProfileError::StressOutOfRange(11))
        );
        assert!(HealthProfile::new("A", 30, 7.0, 5).is_ok());
    }

    #[test]
    fn test_prompts_embed_profile_fields() {
        let p = profile();
        let prompt = p.recommendation_prompt();
        assert!(prompt.contains("14 year old"));
        assert!(prompt.contains("Hiro"));
        assert!(prompt.contains("7 hours per night"));
        assert!(prompt.contains("5/10"));

        let follow_up = p.follow_up_prompt("how can I sleep better?");
        assert!(follow_up.contains("how can I sleep better?"));
        assert!(follow_up.contains("Hiro"));
    }

    #[tokio::test]
    async fn test_recommendations_pass_through_on_success() {
        let service = HealthCheckService::new(OkAgent, Box::new(SeededSelector::new(1)));
        let text = service.recommendations(&profile()).await;
        assert_eq!(text, "upstream recommendations");
    }

    #[tokio::test]
    async fn test_failure_yields_fallback_not_error() {
        let service = HealthCheckService::new(FailingAgent, Box::new(SeededSelector::new(1)));
        // The recommendation prompt mentions sleep, so the sleep fallback fires
        let text = service.recommendations(&profile()).await;
        assert!(!text.is_empty());
        assert!(!text.contains("timed out"));
    }

    #[tokio::test]
    async fn test_follow_up_failure_uses_fallback_for_question() {
        let service = HealthCheckService::new(FailingAgent, Box::new(SeededSelector::new(1)));
        let text = service.ask(&profile(), "what should I eat?").await;
        assert!(!text.is_empty());
        assert!(!text.contains("timed out"));
    }
}
