//! Gemini implementation of the HintProvider trait
//!
//! Calls `models/{model}:generateContent` with the hint instruction as the
//! system instruction and the conversation as `contents`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use tc_core::errors::DomainError;
use tc_core::services::{ChatRole, ChatTurn, HintProvider};
use tc_shared::config::AiConfig;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

fn build_request<'a>(system_instruction: &'a str, turns: &'a [ChatTurn]) -> GenerateRequest<'a> {
    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: system_instruction,
            }],
        },
        contents: turns
            .iter()
            .map(|turn| Content {
                role: Some(match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Model => "model",
                }),
                parts: vec![Part { text: &turn.content }],
            })
            .collect(),
    }
}

/// Concatenated text of the first candidate
fn extract_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

pub struct GeminiHintClient {
    client: reqwest::Client,
    config: AiConfig,
}

impl GeminiHintClient {
    pub fn new(config: AiConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            tracing::warn!("AI_API_KEY not set; the homework assistant will be unavailable");
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    async fn request(&self, system_instruction: &str, turns: &[ChatTurn]) -> Result<String, InfrastructureError> {
        if !self.config.is_configured() {
            return Err(InfrastructureError::Gateway {
                service: "ai",
                message: "AI assistant is not configured".to_string(),
            });
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&build_request(system_instruction, turns))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::Gateway {
                service: "ai",
                message: format!("model returned {}", status),
            });
        }

        let body: GenerateResponse = response.json().await?;
        extract_text(body).ok_or_else(|| InfrastructureError::Gateway {
            service: "ai",
            message: "model returned no text".to_string(),
        })
    }
}

#[async_trait]
impl HintProvider for GeminiHintClient {
    async fn generate(&self, system_instruction: &str, turns: &[ChatTurn]) -> Result<String, DomainError> {
        Ok(self.request(system_instruction, turns).await?)
    }
}
