#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Generative-AI commentary for the dashboard.
//!
//! Supports Anthropic Claude, `OpenAI` (and any `OpenAI`-compatible
//! self-hosted server via `AI_BASE_URL`) and Google Gemini behind a common
//! [`providers::LlmProvider`] trait. The [`advisor::Advisor`] wraps an
//! optional provider and never fails: without credentials it answers with
//! fixed simulated-mode text, and provider errors are logged and replaced
//! with fixed fallback text.

pub mod advisor;
pub mod prompts;
pub mod providers;

pub use advisor::{Advisor, AdvisorMode};

use thiserror::Error;

/// Errors that can occur while talking to an LLM provider.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}
