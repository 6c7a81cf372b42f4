//! The canonical parent-to-tutor favorites relation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Flip membership of `(owner_id, tutor_id)` in one atomic step.
    ///
    /// # Returns
    /// The membership after the flip
    async fn toggle(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError>;

    /// Insert the pair. Returns `false` if it was already present.
    async fn add(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError>;

    /// Delete the pair. Returns `false` if it was absent.
    async fn remove(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError>;

    /// Favorited tutor ids, most recently added first
    async fn list_tutor_ids(&self, owner_id: Uuid) -> Result<Vec<Uuid>, DomainError>;

    async fn contains(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError>;
}
