//! Outbound text-completion client for the chat endpoint.
//!
//! The handler talks to a [`CompletionClient`] trait object so tests can swap
//! in a stub. The HTTP implementation speaks the OpenAI-compatible
//! chat-completions format and makes exactly one request per question.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetwise_core::assistant::ChatReply;

use crate::config::Config;

/// Reasons a completion request did not yield an answer.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant API key is not configured")]
    MissingApiKey,

    #[error("request to assistant failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("assistant returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("assistant response contained no text")]
    EmptyResponse,
}

/// Something that turns a system prompt and a user message into text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AssistantError>;
}

/// Asks the assistant and converts any failure into the fallback reply.
pub async fn answer(client: &dyn CompletionClient, system: &str, user: &str) -> ChatReply {
    match client.complete(system, user).await {
        Ok(text) => ChatReply::answered(text),
        Err(err) => {
            tracing::warn!(error = %err, "Assistant unavailable, using fallback reply");
            ChatReply::fallback()
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if it has any.
    fn into_text(self) -> Result<String, AssistantError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AssistantError::EmptyResponse)
    }
}

/// [`CompletionClient`] backed by an OpenAI-compatible HTTP endpoint.
pub struct HttpCompletionClient {
    http: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpCompletionClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder()
            .timeout(config.assistant_timeout())
            .build()?;

        Ok(Self {
            http,
            url: config.assistant_api_url.clone(),
            model: config.assistant_model.clone(),
            api_key: config.assistant_api_key.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AssistantError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingApiKey)?;

        let request = CompletionRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        tracing::debug!(url = %self.url, model = %self.model, "Sending completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<CompletionResponse>().await?.into_text()
    }
}
