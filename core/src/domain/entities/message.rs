//! Direct messages and the conversation identifier derived from their participants.
//!
//! A conversation is not stored on its own: it is the set of messages that
//! share a `conversation_id`. The id is the two participant ids sorted
//! lexicographically and joined with `_`, so either participant computes the
//! same value without a lookup.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ConversationError;

/// Separator between the two participant ids of a conversation id
pub const CONVERSATION_ID_SEPARATOR: char = '_';

/// Derives the canonical conversation id for two participants.
///
/// Both ids must be non-empty, distinct and free of the separator. The result
/// is independent of argument order.
///
/// # Example
///
/// ```
/// use tc_core::domain::entities::derive_conversation_id;
///
/// assert_eq!(derive_conversation_id("u2", "u1").unwrap(), "u1_u2");
/// ```
pub fn derive_conversation_id(a: &str, b: &str) -> Result<String, ConversationError> {
    if a.is_empty()
        || b.is_empty()
        || a.contains(CONVERSATION_ID_SEPARATOR)
        || b.contains(CONVERSATION_ID_SEPARATOR)
    {
        return Err(ConversationError::InvalidConversationId);
    }
    if a == b {
        return Err(ConversationError::SelfMessage);
    }
    let (first, second) = if a < b { (a, b) } else { (b, a) };
    Ok(format!("{}{}{}", first, CONVERSATION_ID_SEPARATOR, second))
}

/// Splits a conversation id into its two participant ids.
///
/// Returns `None` unless the id is exactly two non-empty parts.
pub fn conversation_participants(conversation_id: &str) -> Option<(&str, &str)> {
    let (first, second) = conversation_id.split_once(CONVERSATION_ID_SEPARATOR)?;
    if first.is_empty() || second.is_empty() || second.contains(CONVERSATION_ID_SEPARATOR) {
        return None;
    }
    Some((first, second))
}

/// Membership test on the split conversation id
pub fn is_participant(conversation_id: &str, user_id: &str) -> bool {
    conversation_participants(conversation_id)
        .is_some_and(|(first, second)| first == user_id || second == user_id)
}

/// A direct message between two users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub conversation_id: String,
    pub text: String,
    /// Set once the recipient has seen the message; never reverts
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates an unread message, deriving its conversation id
    pub fn new(sender_id: Uuid, recipient_id: Uuid, text: String) -> Result<Self, ConversationError> {
        let conversation_id =
            derive_conversation_id(&sender_id.to_string(), &recipient_id.to_string())?;
        Ok(Self {
            id: Uuid::new_v4(),
            sender_id,
            recipient_id,
            conversation_id,
            text,
            read: false,
            created_at: Utc::now(),
        })
    }

    /// Marks the message as read. Returns whether the flag changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.read;
        self.read = true;
        changed
    }

    /// Whether the message is waiting to be read by `user_id`
    pub fn is_unread_for(&self, user_id: Uuid) -> bool {
        self.recipient_id == user_id && !self.read
    }

    /// The participant that is not `user_id`
    pub fn counterpart_of(&self, user_id: Uuid) -> Uuid {
        if self.sender_id == user_id {
            self.recipient_id
        } else {
            self.sender_id
        }
    }
}

/// Per-conversation aggregate computed for one viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationDigest {
    pub conversation_id: String,
    pub other_participant_id: Uuid,
    pub last_message: Message,
    pub unread_count: u64,
}

/// Groups a user's messages by conversation.
///
/// The last message is the one with the greatest `created_at`, the unread
/// count covers messages addressed to `user_id` that are still unread, and
/// the result is ordered by last message time, newest first.
pub fn summarize_conversations(
    user_id: Uuid,
    messages: impl IntoIterator<Item = Message>,
) -> Vec<ConversationDigest> {
    let mut groups: HashMap<String, ConversationDigest> = HashMap::new();

    for message in messages {
        let unread = u64::from(message.is_unread_for(user_id));
        match groups.get_mut(&message.conversation_id) {
            Some(digest) => {
                digest.unread_count += unread;
                if message.created_at > digest.last_message.created_at {
                    digest.last_message = message;
                }
            }
            None => {
                let digest = ConversationDigest {
                    conversation_id: message.conversation_id.clone(),
                    other_participant_id: message.counterpart_of(user_id),
                    unread_count: unread,
                    last_message: message,
                };
                groups.insert(digest.conversation_id.clone(), digest);
            }
        }
    }

    let mut digests: Vec<ConversationDigest> = groups.into_values().collect();
    digests.sort_by(|a, b| {
        b.last_message
            .created_at
            .cmp(&a.last_message.created_at)
            .then_with(|| a.conversation_id.cmp(&b.conversation_id))
    });
    digests
}
