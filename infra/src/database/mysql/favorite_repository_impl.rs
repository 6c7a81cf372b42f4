//! MySQL implementation of the FavoriteRepository trait.
//!
//! Membership changes are single statements against the primary key
//! `(owner_id, tutor_id)`, so concurrent toggles never leave duplicates.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

use tc_core::errors::DomainError;
use tc_core::repositories::FavoriteRepository;

use super::{parse_uuid, query_failed};

pub struct MySqlFavoriteRepository {
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn toggle(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        if self.remove(owner_id, tutor_id).await? {
            return Ok(false);
        }
        self.add(owner_id, tutor_id).await?;
        Ok(true)
    }

    async fn add(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "INSERT IGNORE INTO favorites (owner_id, tutor_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(owner_id.to_string())
        .bind(tutor_id.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(query_failed("add favorite"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM favorites WHERE owner_id = ? AND tutor_id = ?")
            .bind(owner_id.to_string())
            .bind(tutor_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("remove favorite"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_tutor_ids(&self, owner_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let ids: Vec<String> = sqlx::query_scalar(
            "SELECT tutor_id FROM favorites WHERE owner_id = ? ORDER BY created_at DESC",
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("list favorites"))?;

        ids.iter()
            .map(|id| parse_uuid("tutor_id", id).map_err(DomainError::from))
            .collect()
    }

    async fn contains(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM favorites WHERE owner_id = ? AND tutor_id = ? LIMIT 1",
        )
        .bind(owner_id.to_string())
        .bind(tutor_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("check favorite"))?;

        Ok(found.is_some())
    }
}
