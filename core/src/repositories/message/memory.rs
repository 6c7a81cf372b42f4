//! In-memory message store keyed by conversation id.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Message;
use crate::errors::DomainError;

use super::trait_::MessageRepository;

/// Process-local message repository
#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    conversations: Arc<RwLock<HashMap<String, Vec<Message>>>>,
}

impl InMemoryMessageRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, DomainError> {
        let mut conversations = self.conversations.write().await;
        conversations
            .entry(message.conversation_id.clone())
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn find_by_conversation(&self, conversation_id: &str) -> Result<Vec<Message>, DomainError> {
        let conversations = self.conversations.read().await;
        let mut messages = conversations.get(conversation_id).cloned().unwrap_or_default();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Message>, DomainError> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .values()
            .flatten()
            .filter(|m| m.sender_id == user_id || m.recipient_id == user_id)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, conversation_id: &str, recipient_id: Uuid) -> Result<u64, DomainError> {
        let mut conversations = self.conversations.write().await;
        let changed = conversations
            .get_mut(conversation_id)
            .map(|messages| {
                messages
                    .iter_mut()
                    .filter(|m| m.is_unread_for(recipient_id))
                    .map(|m| u64::from(m.mark_read()))
                    .sum()
            })
            .unwrap_or(0);
        Ok(changed)
    }

    async fn delete_conversation(&self, conversation_id: &str) -> Result<u64, DomainError> {
        let mut conversations = self.conversations.write().await;
        Ok(conversations
            .remove(conversation_id)
            .map(|messages| messages.len() as u64)
            .unwrap_or(0))
    }

    async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, DomainError> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .values()
            .flatten()
            .filter(|m| m.is_unread_for(recipient_id))
            .count() as u64)
    }
}
