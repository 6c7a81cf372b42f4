//! Messaging service implementation

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{is_participant, summarize_conversations, Message, User};
use crate::domain::value_objects::ConversationSummary;
use crate::errors::{ConversationError, DomainResult, ValidationError};
use crate::repositories::{MessageRepository, UserRepository};

/// Conversation and message operations on behalf of an authenticated user
pub struct MessagingService {
    messages: Arc<dyn MessageRepository>,
    users: Arc<dyn UserRepository>,
}

impl MessagingService {
    pub fn new(messages: Arc<dyn MessageRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { messages, users }
    }

    /// Send a message from `sender_id` to `recipient_id`
    ///
    /// # Errors
    ///
    /// * `ValidationError::RequiredField` - Empty text
    /// * `ConversationError::SelfMessage` - Sender and recipient are the same user
    /// * `ConversationError::RecipientNotFound` - No user with `recipient_id`
    pub async fn send_message(
        &self,
        sender_id: Uuid,
        recipient_id: Uuid,
        text: &str,
    ) -> DomainResult<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::RequiredField { field: "text".into() }.into());
        }
        if sender_id == recipient_id {
            return Err(ConversationError::SelfMessage.into());
        }
        if self.users.find_by_id(recipient_id).await?.is_none() {
            return Err(ConversationError::RecipientNotFound.into());
        }

        let message = Message::new(sender_id, recipient_id, text.to_string())?;
        let message = self.messages.insert(message).await?;

        tracing::info!(
            conversation_id = %message.conversation_id,
            message_id = %message.id,
            event = "message_sent",
            "Message stored"
        );
        Ok(message)
    }

    /// Inbox of `user_id`, newest conversation first
    ///
    /// Conversations whose other participant no longer resolves are omitted.
    pub async fn list_conversations(&self, user_id: Uuid) -> DomainResult<Vec<ConversationSummary>> {
        let messages = self.messages.find_for_user(user_id).await?;
        let digests = summarize_conversations(user_id, messages);
        if digests.is_empty() {
            return Ok(Vec::new());
        }

        let other_ids: Vec<Uuid> = digests.iter().map(|d| d.other_participant_id).collect();
        let others: HashMap<Uuid, User> = self
            .users
            .find_by_ids(&other_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let summaries = digests
            .into_iter()
            .filter_map(|digest| match others.get(&digest.other_participant_id) {
                Some(other) => Some(ConversationSummary::from_digest(digest, other)),
                None => {
                    tracing::debug!(
                        conversation_id = %digest.conversation_id,
                        "Skipping conversation with unknown participant"
                    );
                    None
                }
            })
            .collect();
        Ok(summaries)
    }

    /// Messages of a conversation, oldest first
    ///
    /// Viewing acknowledges: every unread message addressed to the viewer is
    /// marked read before the fetch, so the returned messages show the
    /// updated flags. Messages the viewer sent are untouched.
    pub async fn get_conversation_messages(
        &self,
        user_id: Uuid,
        conversation_id: &str,
    ) -> DomainResult<Vec<Message>> {
        self.ensure_participant(user_id, conversation_id)?;

        let marked = self.messages.mark_read(conversation_id, user_id).await?;
        if marked > 0 {
            tracing::debug!(conversation_id, marked, "Marked messages read on view");
        }
        self.messages.find_by_conversation(conversation_id).await
    }

    /// Explicitly mark the viewer's unread messages read. Idempotent.
    ///
    /// # Returns
    /// Number of messages that changed
    pub async fn mark_as_read(&self, user_id: Uuid, conversation_id: &str) -> DomainResult<u64> {
        self.ensure_participant(user_id, conversation_id)?;
        self.messages.mark_read(conversation_id, user_id).await
    }

    /// Permanently delete the conversation for both participants
    ///
    /// # Returns
    /// Number of messages deleted
    pub async fn clear_conversation(&self, user_id: Uuid, conversation_id: &str) -> DomainResult<u64> {
        self.ensure_participant(user_id, conversation_id)?;
        let deleted = self.messages.delete_conversation(conversation_id).await?;
        tracing::info!(
            conversation_id,
            user_id = %user_id,
            deleted,
            event = "conversation_cleared",
            "Conversation cleared"
        );
        Ok(deleted)
    }

    /// Unread messages addressed to the user across all conversations
    pub async fn unread_total(&self, user_id: Uuid) -> DomainResult<u64> {
        self.messages.count_unread(user_id).await
    }

    fn ensure_participant(&self, user_id: Uuid, conversation_id: &str) -> DomainResult<()> {
        if is_participant(conversation_id, &user_id.to_string()) {
            Ok(())
        } else {
            tracing::warn!(
                conversation_id,
                user_id = %user_id,
                event = "conversation_access_denied",
                "Caller is not a participant"
            );
            Err(ConversationError::NotParticipant.into())
        }
    }
}
