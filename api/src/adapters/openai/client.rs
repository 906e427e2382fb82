//! OpenAI-compatible text generator implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::prompts::{build_prompt, SYSTEM_PROMPT};
use crate::domain::ports::{PromptKind, TextGenerator};
use crate::error::ExternalServiceError;

/// Text generator backed by a `/chat/completions` endpoint
pub struct OpenAiTextGenerator {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiTextGenerator {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, ExternalServiceError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ChatCompletionResponse, ExternalServiceError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ExternalServiceError::InvalidResponse(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ExternalServiceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> Result<String, ExternalServiceError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ExternalServiceError::InvalidResponse("no completion content".into()))
    }
}

/// Sampling temperature per kind; tags and metadata want stable output
fn temperature_for(kind: PromptKind) -> f32 {
    match kind {
        PromptKind::Tags | PromptKind::Metadata => 0.3,
        PromptKind::Summary => 0.7,
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, kind: PromptKind, text: &str) -> Result<String, ExternalServiceError> {
        let prompt = build_prompt(kind, text);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: temperature_for(kind),
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await?.into_text()
    }
}

/// Text generator used when no provider is configured
pub struct NoopTextGenerator;

#[async_trait]
impl TextGenerator for NoopTextGenerator {
    async fn generate(
        &self,
        _kind: PromptKind,
        _text: &str,
    ) -> Result<String, ExternalServiceError> {
        Err(ExternalServiceError::NotConfigured)
    }
}

/// The generator selected at start-up from configuration
pub enum TextGeneratorImpl {
    OpenAi(OpenAiTextGenerator),
    Noop(NoopTextGenerator),
}

#[async_trait]
impl TextGenerator for TextGeneratorImpl {
    async fn generate(&self, kind: PromptKind, text: &str) -> Result<String, ExternalServiceError> {
        match self {
            TextGeneratorImpl::OpenAi(g) => g.generate(kind, text).await,
            TextGeneratorImpl::Noop(g) => g.generate(kind, text).await,
        }
    }
}
