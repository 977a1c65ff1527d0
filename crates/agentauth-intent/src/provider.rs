//! LLM provider implementations

use crate::types::{IntentError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for language-model providers that can answer a single prompt
/// with a JSON object.
#[async_trait]
pub trait IntentProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Complete a prompt and return the raw reply text
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

// ============================================================================
// OpenAI-Compatible Provider
// ============================================================================

/// Configuration for the OpenAI-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for OpenAiCompatConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("AGENTAUTH_OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            api_key: std::env::var("AGENTAUTH_OPENAI_API_KEY").ok(),
            model: std::env::var("AGENTAUTH_OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }
}

/// OpenAI-compatible chat-completions provider (OpenAI, vLLM, llama.cpp)
pub struct OpenAiCompatProvider {
    config: OpenAiCompatConfig,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(OpenAiCompatConfig::default())
    }

    /// Whether the provider has credentials to work with
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

#[async_trait]
impl IntentProvider for OpenAiCompatProvider {
    fn name(&self) -> &'static str {
        "OpenAICompat"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| IntentError::ProviderNotAvailable {
                provider: self.name().to_string(),
            })?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| IntentError::NetworkError {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(IntentError::RequestFailed {
                message: format!("HTTP {}", response.status()),
            });
        }

        let reply: ChatResponse = response.json().await.map_err(|e| IntentError::InvalidReply {
            message: e.to_string(),
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| IntentError::InvalidReply {
                message: "no content in completion".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_provider_is_detected() {
        let provider = OpenAiCompatProvider::new(OpenAiCompatConfig {
            base_url: "http://localhost:9".to_string(),
            api_key: None,
            model: "test".to_string(),
        });
        assert!(!provider.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_provider_refuses_to_complete() {
        let provider = OpenAiCompatProvider::new(OpenAiCompatConfig {
            base_url: "http://localhost:9".to_string(),
            api_key: None,
            model: "test".to_string(),
        });
        let result = provider.complete("system", "user").await;
        assert!(matches!(
            result,
            Err(IntentError::ProviderNotAvailable { .. })
        ));
    }
}
