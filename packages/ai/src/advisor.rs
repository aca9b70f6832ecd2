//! The dashboard's AI advisor.
//!
//! Every call returns text. With no provider configured the advisor runs in
//! simulated mode and answers with canned text. A failed provider call is
//! logged and answered with a fixed fallback. There are no retries.
//!
//! Canned text does not name a provider.

use std::sync::Arc;

use serde::Serialize;
use ward_air_ward_models::Ward;

use crate::prompts;
use crate::providers::{self, LlmProvider, Message};

/// Reply to a ward analysis request in simulated mode.
pub const SIMULATED_ANALYSIS: &str =
    "AI API key not configured. Using simulated analysis: High pollution detected due to local sources.";
/// Reply to a forecast request in simulated mode.
pub const SIMULATED_FORECAST: &str =
    "Simulated Forecast: Pollution levels expected to rise in industrial zones due to low wind speed.";
/// Reply to a chat question in simulated mode.
pub const SIMULATED_CHAT: &str = "I am running in simulation mode. Based on the data, Okhla has the highest pollution today. Try connecting an API key for live AI responses.";

pub const ANALYSIS_FAILED: &str =
    "AI Analysis temporarily unavailable. Please check connectivity or API limits.";
pub const FORECAST_FAILED: &str = "Forecast insights unavailable.";
pub const CHAT_FAILED: &str = "I'm having trouble connecting to my servers right now.";

pub const ANALYSIS_EMPTY: &str = "Analysis unavailable.";
pub const FORECAST_EMPTY: &str = "Forecast unavailable.";
pub const CHAT_EMPTY: &str = "I couldn't process that question.";

/// Whether replies come from a model or from canned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AdvisorMode {
    Live,
    Simulated,
}

/// Canned replies for one kind of request.
struct Replies {
    simulated: &'static str,
    failed: &'static str,
    empty: &'static str,
}

const ANALYSIS: Replies = Replies {
    simulated: SIMULATED_ANALYSIS,
    failed: ANALYSIS_FAILED,
    empty: ANALYSIS_EMPTY,
};

const FORECAST: Replies = Replies {
    simulated: SIMULATED_FORECAST,
    failed: FORECAST_FAILED,
    empty: FORECAST_EMPTY,
};

const CHAT: Replies = Replies {
    simulated: SIMULATED_CHAT,
    failed: CHAT_FAILED,
    empty: CHAT_EMPTY,
};

/// Generates commentary on ward readings.
#[derive(Clone)]
pub struct Advisor {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl Advisor {
    /// An advisor backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// An advisor that only returns canned text.
    #[must_use]
    pub const fn simulated() -> Self {
        Self { provider: None }
    }

    /// Creates an advisor from the environment, falling back to simulated
    /// mode when no provider can be configured.
    #[must_use]
    pub fn from_env() -> Self {
        match providers::create_provider_from_env() {
            Ok(provider) => {
                log::info!("AI advisor using provider: {}", provider.name());
                Self::new(Arc::from(provider))
            }
            Err(e) => {
                log::warn!("AI advisor running in simulated mode: {e}");
                Self::simulated()
            }
        }
    }

    #[must_use]
    pub const fn mode(&self) -> AdvisorMode {
        if self.provider.is_some() {
            AdvisorMode::Live
        } else {
            AdvisorMode::Simulated
        }
    }

    /// Name of the configured provider, if any.
    #[must_use]
    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|p| p.name())
    }

    /// Explains a ward's pollution level and suggests mitigations.
    pub async fn ward_analysis(&self, ward: &Ward) -> String {
        self.ask(&prompts::ward_analysis(ward), &ANALYSIS).await
    }

    /// Predicts the next 24 hours across `wards`.
    pub async fn forecast_insights(&self, wards: &[Ward]) -> String {
        self.ask(&prompts::forecast_insights(wards), &FORECAST).await
    }

    /// Answers a resident's question about `wards`.
    pub async fn chat(&self, query: &str, wards: &[Ward]) -> String {
        self.ask(&prompts::chat(query, wards), &CHAT).await
    }

    async fn ask(&self, prompt: &str, replies: &Replies) -> String {
        let Some(provider) = &self.provider else {
            return replies.simulated.to_string();
        };

        match provider
            .complete(prompts::SYSTEM_PROMPT, &[Message::user(prompt)])
            .await
        {
            Ok(response) if response.text.trim().is_empty() => replies.empty.to_string(),
            Ok(response) => response.text,
            Err(e) => {
                log::error!("AI provider {} failed: {e}", provider.name());
                replies.failed.to_string()
            }
        }
    }
}
