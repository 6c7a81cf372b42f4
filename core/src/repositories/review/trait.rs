//! Review persistence.
//!
//! Reviews are owned by the tutor record, so implementations live next to the
//! user store: `InMemoryUserRepository` here and the MySQL user repository in
//! the infrastructure crate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Review, ReviewSummary};
use crate::errors::DomainError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Stores `review`, replacing the reviewer's previous review of the same
    /// tutor, then recomputes the tutor's rating and review count from all of
    /// its reviews and writes them to the tutor record.
    ///
    /// The upsert and the recompute form one atomic step.
    ///
    /// # Errors
    /// * `DomainError::NotFound` when the tutor does not exist
    async fn upsert_review(&self, review: Review) -> Result<ReviewSummary, DomainError>;

    /// Reviews of a tutor, most recent first
    async fn list_for_tutor(&self, tutor_id: Uuid) -> Result<Vec<Review>, DomainError>;
}
