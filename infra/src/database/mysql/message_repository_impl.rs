//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use tc_core::domain::entities::Message;
use tc_core::errors::DomainError;
use tc_core::repositories::MessageRepository;

use super::{parse_uuid, query_failed};
use crate::InfrastructureError;

const MESSAGE_COLUMNS: &str =
    "id, conversation_id, sender_id, recipient_id, text, is_read, created_at";

pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &MySqlRow) -> Result<Message, InfrastructureError> {
        let id: String = row.try_get("id")?;
        let sender_id: String = row.try_get("sender_id")?;
        let recipient_id: String = row.try_get("recipient_id")?;
        Ok(Message {
            id: parse_uuid("id", &id)?,
            sender_id: parse_uuid("sender_id", &sender_id)?,
            recipient_id: parse_uuid("recipient_id", &recipient_id)?,
            conversation_id: row.try_get("conversation_id")?,
            text: row.try_get("text")?,
            read: row.try_get("is_read")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }

    fn rows_to_messages(rows: Vec<MySqlRow>) -> Result<Vec<Message>, DomainError> {
        rows.iter()
            .map(|row| Self::row_to_message(row).map_err(DomainError::from))
            .collect()
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, sender_id, recipient_id, text, is_read, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.id.to_string())
        .bind(&message.conversation_id)
        .bind(message.sender_id.to_string())
        .bind(message.recipient_id.to_string())
        .bind(&message.text)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed("insert message"))?;

        Ok(message)
    }

    async fn find_by_conversation(&self, conversation_id: &str) -> Result<Vec<Message>, DomainError> {
        let query = format!(
            "SELECT {} FROM messages WHERE conversation_id = ? ORDER BY created_at ASC, id ASC",
            MESSAGE_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(conversation_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find conversation"))?;
        Self::rows_to_messages(rows)
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Message>, DomainError> {
        let query = format!(
            "SELECT {} FROM messages WHERE sender_id = ? OR recipient_id = ? ORDER BY created_at ASC",
            MESSAGE_COLUMNS
        );
        let id = user_id.to_string();
        let rows = sqlx::query(&query)
            .bind(&id)
            .bind(&id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find user messages"))?;
        Self::rows_to_messages(rows)
    }

    async fn mark_read(&self, conversation_id: &str, recipient_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE \
             WHERE conversation_id = ? AND recipient_id = ? AND is_read = FALSE",
        )
        .bind(conversation_id)
        .bind(recipient_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(query_failed("mark messages read"))?;

        Ok(result.rows_affected())
    }

    async fn delete_conversation(&self, conversation_id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM messages WHERE conversation_id = ?")
            .bind(conversation_id)
            .execute(&self.pool)
            .await
            .map_err(query_failed("delete conversation"))?;

        Ok(result.rows_affected())
    }

    async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = ? AND is_read = FALSE",
        )
        .bind(recipient_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed("count unread"))?;

        Ok(count.max(0) as u64)
    }
}
