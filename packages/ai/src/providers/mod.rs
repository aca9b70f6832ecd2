//! LLM provider abstraction and implementations.
//!
//! Supports Anthropic Claude, `OpenAI` and Google Gemini via a common trait.

pub mod anthropic;
pub mod gemini;
pub mod openai;

use serde::{Deserialize, Serialize};

use crate::AiError;

/// Upper bound on generated tokens per reply.
pub const MAX_TOKENS: u32 = 1024;

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl Message {
    /// A message from the user.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the LLM provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// Generated text. May be empty.
    pub text: String,
    pub stop_reason: StopReason,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Model finished its response naturally.
    EndTurn,
    /// Maximum tokens reached.
    MaxTokens,
}

/// Trait for LLM providers.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider name for logs and the capabilities payload.
    fn name(&self) -> &'static str;

    /// Sends a single-turn completion request.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails.
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[Message],
    ) -> Result<LlmResponse, AiError>;
}

/// Provider choice and credentials, usually read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Explicit `AI_PROVIDER` choice.
    pub provider: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    /// `GEMINI_API_KEY`, or the generic `API_KEY`.
    pub gemini_api_key: Option<String>,
    /// `AI_MODEL` override.
    pub model: Option<String>,
    /// `AI_BASE_URL` for `OpenAI`-compatible servers.
    pub base_url: Option<String>,
}

impl ProviderSettings {
    /// Reads `AI_PROVIDER`, the API key variables, `AI_MODEL` and
    /// `AI_BASE_URL`. Empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            provider: var("AI_PROVIDER"),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            openai_api_key: var("OPENAI_API_KEY"),
            gemini_api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            model: var("AI_MODEL"),
            base_url: var("AI_BASE_URL"),
        }
    }

    /// Picks a provider from whichever credential is present.
    ///
    /// Checks Anthropic, then `OpenAI` (or an `OpenAI`-compatible base URL),
    /// then Gemini.
    #[must_use]
    pub fn detect_provider(&self) -> Option<&'static str> {
        if self.anthropic_api_key.is_some() {
            log::info!("Auto-detected AI provider: Anthropic (ANTHROPIC_API_KEY found)");
            return Some("anthropic");
        }

        if self.openai_api_key.is_some() || self.base_url.is_some() {
            log::info!("Auto-detected AI provider: OpenAI (OPENAI_API_KEY or AI_BASE_URL found)");
            return Some("openai");
        }

        if self.gemini_api_key.is_some() {
            log::info!("Auto-detected AI provider: Gemini (GEMINI_API_KEY or API_KEY found)");
            return Some("gemini");
        }

        None
    }
}

/// Creates an LLM provider from `settings`.
///
/// If `provider` is set explicitly, uses that provider. Otherwise
/// auto-detects from the available credentials.
///
/// # Errors
///
/// Returns [`AiError::Config`] if no credentials are found or the
/// requested provider is unknown or not configured.
pub fn create_provider(settings: &ProviderSettings) -> Result<Box<dyn LlmProvider>, AiError> {
    let provider = match settings.provider.as_deref() {
        Some(explicit) => explicit.to_lowercase(),
        None => settings
            .detect_provider()
            .ok_or_else(|| AiError::Config {
                message: "No AI credentials set. Set one of ANTHROPIC_API_KEY, \
                          OPENAI_API_KEY, GEMINI_API_KEY or API_KEY."
                    .to_string(),
            })?
            .to_string(),
    };

    match provider.as_str() {
        "anthropic" | "claude" => {
            let api_key = settings
                .anthropic_api_key
                .clone()
                .ok_or_else(|| missing_key("ANTHROPIC_API_KEY"))?;
            let model = settings
                .model
                .clone()
                .unwrap_or_else(|| anthropic::DEFAULT_MODEL.to_string());
            Ok(Box::new(anthropic::AnthropicProvider::new(api_key, model)))
        }
        "openai" | "gpt" => {
            // Self-hosted servers usually take no key.
            let api_key = match (&settings.openai_api_key, &settings.base_url) {
                (Some(key), _) => Some(key.clone()),
                (None, Some(_)) => None,
                (None, None) => return Err(missing_key("OPENAI_API_KEY")),
            };
            let model = settings
                .model
                .clone()
                .unwrap_or_else(|| openai::DEFAULT_MODEL.to_string());
            let base_url = settings
                .base_url
                .clone()
                .unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string());
            Ok(Box::new(openai::OpenAiProvider::new(api_key, model, base_url)))
        }
        "gemini" | "google" => {
            let api_key = settings
                .gemini_api_key
                .clone()
                .ok_or_else(|| missing_key("GEMINI_API_KEY"))?;
            let model = settings
                .model
                .clone()
                .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string());
            Ok(Box::new(gemini::GeminiProvider::new(api_key, model)))
        }
        other => Err(AiError::Config {
            message: format!("Unknown AI provider: {other}. Use 'anthropic', 'openai', or 'gemini'."),
        }),
    }
}

/// Creates an LLM provider from the environment.
///
/// # Errors
///
/// See [`create_provider`].
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, AiError> {
    create_provider(&ProviderSettings::from_env())
}

fn missing_key(var: &str) -> AiError {
    AiError::Config {
        message: format!("{var} environment variable not set"),
    }
}
