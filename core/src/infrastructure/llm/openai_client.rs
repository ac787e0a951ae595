use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    meal_analysis::{image::ImagePayload, ports::VisionClient},
};

const QUOTA_EXCEEDED_CODE: &str = "insufficient_quota";

/// Chat-completions client for OpenAI-compatible vision models.
#[derive(Debug, Clone)]
pub struct OpenAIVisionClient {
    api_key: String,
    model_name: String,
    base_url: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: String },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: UpstreamError,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl OpenAIVisionClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build OpenAI HTTP client: {}", e);
                CoreError::ExternalServiceError(e.to_string())
            })?;

        Ok(Self {
            api_key: config.openai_api_key.clone(),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<Option<String>, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error: {} - {}", status, error_text);
            return Err(upstream_error(status, &error_text));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        Ok(first_content(completion))
    }
}

impl VisionClient for OpenAIVisionClient {
    async fn analyze_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> Result<Option<String>, CoreError> {
        debug!(
            model = %self.model_name,
            mime_type = image.mime_type(),
            image_len = image.len(),
            "sending image to OpenAI"
        );

        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                        },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        self.call_chat_completions(request).await
    }
}

fn first_content(completion: ChatCompletionResponse) -> Option<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
}

/// Translates a non-success upstream reply into a [`CoreError`].
fn upstream_error(status: StatusCode, body: &str) -> CoreError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.code.as_deref() == Some(QUOTA_EXCEEDED_CODE) => {
            CoreError::QuotaExceeded
        }
        Ok(ErrorEnvelope {
            error: UpstreamError {
                message: Some(message),
                ..
            },
        }) if !message.is_empty() => CoreError::ExternalServiceError(message),
        _ => CoreError::ExternalServiceError(format!("OpenAI API returned error: {}", status)),
    }
}
