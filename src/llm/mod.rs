//! Generation API access.
//!
//! Wraps the two remote operations against the chat-completions endpoint:
//! - `construct_prompt`: category-aware system instruction + formatted
//!   option selections → a generated prompt
//! - `enhance_prompt`: refine a previously generated prompt
//!
//! Both operations are single-shot (no internal retry), and every failure is
//! classified into [`GenerationError`] before it leaves this module — raw
//! transport errors never reach the caller.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the generation API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl ApiConfig {
    /// Read the connection settings from the environment (a `.env` file is
    /// honored at startup). A missing or empty `API_KEY` classifies as a
    /// credential error, the same as a rejected key.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var("API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(GenerationError::InvalidCredential);
        }

        Ok(Self {
            api_url: std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key,
            model: std::env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Validates that the expected environment variables are set.
///
/// `API_KEY` is required for any call to succeed; `API_URL` and `MODEL` fall
/// back to the defaults above. Used at startup to log a heads-up, not to
/// abort — the key may arrive later via the environment of a relaunch.
pub fn validate_environment() -> Result<(), String> {
    let required_vars = ["API_KEY", "API_URL", "MODEL"];
    let mut missing_vars = Vec::new();

    for var in &required_vars {
        if std::env::var(var).map(|v| v.trim().is_empty()).unwrap_or(true) {
            missing_vars.push(*var);
        }
    }

    if missing_vars.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        ))
    }
}
