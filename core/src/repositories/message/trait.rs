//! Message repository trait.
//!
//! Read-flag changes go through `mark_read`, a single conditional bulk update
//! (`conversation = ? AND recipient = ? AND read = false`). Implementations
//! must not read-modify-write individual rows, so two devices opening the
//! same conversation at once cannot race.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Message;
use crate::errors::DomainError;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message
    async fn insert(&self, message: Message) -> Result<Message, DomainError>;

    /// All messages of a conversation, oldest first
    async fn find_by_conversation(&self, conversation_id: &str) -> Result<Vec<Message>, DomainError>;

    /// All messages the user sent or received
    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Message>, DomainError>;

    /// Flip `read` to true for every unread message of the conversation
    /// addressed to `recipient_id`.
    ///
    /// # Returns
    /// Number of messages that changed; 0 when all were already read
    async fn mark_read(&self, conversation_id: &str, recipient_id: Uuid) -> Result<u64, DomainError>;

    /// Hard-delete every message of the conversation, for both participants
    ///
    /// # Returns
    /// Number of messages deleted
    async fn delete_conversation(&self, conversation_id: &str) -> Result<u64, DomainError>;

    /// Unread messages addressed to `recipient_id` across all conversations
    async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, DomainError>;
}
