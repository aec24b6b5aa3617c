//! HTTP client for the generation API.

use crate::llm::{classify_http_failure, ApiConfig, GenerationError};
use crate::options::OptionRecord;
use crate::prompt::{
    construct_request, enhance_request, enhance_system, format_options, system_instruction,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.7;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: String,
}

/// Seam between prompt assembly and the wire. Production uses
/// [`HttpTransport`]; tests substitute a scripted one.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError>;
}

/// Makes the actual HTTP request to the chat-completions endpoint.
pub struct HttpTransport {
    http: Client,
    api_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                warn!("failed to build HTTP client: {err}");
                GenerationError::Unknown
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| {
                // timeouts and connection failures have no slot in the taxonomy
                warn!("transport failure: {err}");
                GenerationError::Unknown
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generation API rejected the request: {body}");
            return Err(classify_http_failure(status.as_u16(), &body));
        }

        let parsed: ChatResponse = response.json().await.map_err(|err| {
            warn!("failed to parse API response as JSON: {err}");
            GenerationError::Unknown
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            warn!("generation API returned empty content");
            return Err(GenerationError::Unknown);
        }

        Ok(content)
    }
}

/// The module's public face: one construct call, one enhance call.
pub struct GenerationClient {
    transport: Box<dyn ChatTransport>,
    default_model: String,
}

impl GenerationClient {
    pub fn new(config: &ApiConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            transport: Box::new(HttpTransport::new(config)?),
            default_model: config.model.clone(),
        })
    }

    /// Build a client from the environment. Fails with a credential error
    /// when no API key is configured, before any network traffic.
    pub fn from_env() -> Result<Self, GenerationError> {
        let config = ApiConfig::from_env()?;
        Self::new(&config)
    }

    pub fn with_transport(
        transport: Box<dyn ChatTransport>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            default_model: default_model.into(),
        }
    }

    fn resolve_model(&self, model: &str) -> String {
        if model.is_empty() {
            self.default_model.clone()
        } else {
            model.to_string()
        }
    }

    /// Compose the category-aware system instruction plus the formatted
    /// option selections and issue one generation call.
    pub async fn construct_prompt(
        &self,
        options: &OptionRecord,
        model: &str,
    ) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: self.resolve_model(model),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system_instruction(options.category()),
                },
                Message {
                    role: "user".to_string(),
                    content: construct_request(&format_options(options)),
                },
            ],
            max_tokens: Some(MAX_TOKENS),
            temperature: Some(TEMPERATURE),
        };

        debug!(category = %options.category(), "issuing construct call");
        self.transport.complete(&request).await
    }

    /// Ask the API to refine a previously generated prompt.
    pub async fn enhance_prompt(
        &self,
        existing_prompt: &str,
        model: &str,
    ) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: self.resolve_model(model),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: enhance_system().to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: enhance_request(existing_prompt),
                },
            ],
            max_tokens: Some(MAX_TOKENS),
            temperature: Some(TEMPERATURE),
        };

        debug!("issuing enhance call");
        self.transport.complete(&request).await
    }
}
