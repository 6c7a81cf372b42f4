use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Oldest turns beyond this are dropped before calling the model
pub const MAX_CHAT_TURNS: usize = 20;

const HINT_INSTRUCTION: &str = "You are a patient tutor helping a school student. \
Guide the student with hints, leading questions and the relevant concepts. \
Do not give the final answer, even if asked directly. \
Keep replies short and suited to the student's level.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(alias = "assistant")]
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Text generation backend
#[async_trait]
pub trait HintProvider: Send + Sync {
    /// Generate the next model turn for `turns` under `system_instruction`
    async fn generate(&self, system_instruction: &str, turns: &[ChatTurn]) -> Result<String, DomainError>;
}

pub struct AiAssistantService {
    provider: Arc<dyn HintProvider>,
}

impl AiAssistantService {
    pub fn new(provider: Arc<dyn HintProvider>) -> Self {
        Self { provider }
    }

    /// One-shot hint for a homework question
    pub async fn hint(&self, question: &str, subject: Option<&str>) -> DomainResult<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::RequiredField { field: "question".into() }.into());
        }

        let prompt = match subject.map(str::trim).filter(|s| !s.is_empty()) {
            Some(subject) => format!("Subject: {}\nQuestion: {}", subject, question),
            None => format!("Question: {}", question),
        };
        self.generate(&[ChatTurn::user(prompt)]).await
    }

    /// Continue a conversation; the last turn must come from the user
    pub async fn chat(&self, turns: Vec<ChatTurn>) -> DomainResult<String> {
        let turns: Vec<ChatTurn> = turns
            .into_iter()
            .filter(|t| !t.content.trim().is_empty())
            .collect();
        match turns.last() {
            Some(last) if last.role == ChatRole::User => {}
            _ => return Err(ValidationError::RequiredField { field: "messages".into() }.into()),
        }

        let start = turns.len().saturating_sub(MAX_CHAT_TURNS);
        self.generate(&turns[start..]).await
    }

    async fn generate(&self, turns: &[ChatTurn]) -> DomainResult<String> {
        let reply = self
            .provider
            .generate(HINT_INSTRUCTION, turns)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "ai_request_failed", "AI provider request failed");
                e
            })?;
        tracing::debug!(turns = turns.len(), reply_len = reply.len(), "AI reply generated");
        Ok(reply)
    }
}
