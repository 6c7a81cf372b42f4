//! In-memory user store, also holding the reviews embedded in tutor records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{upsert_review, Review, ReviewSummary, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::review::ReviewRepository;

use super::trait_::UserRepository;

#[derive(Default)]
struct UserStore {
    users: HashMap<Uuid, User>,
    reviews: HashMap<Uuid, Vec<Review>>,
}

/// Process-local user repository
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        let store = self.store.read().await;
        Ok(ids.iter().filter_map(|id| store.users.get(id).cloned()).collect())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        let Some(stored) = store.users.get(&user.id) else {
            return Err(DomainError::not_found("User"));
        };
        // Rating aggregate is only written by upsert_review.
        user.rating = stored.rating;
        user.review_count = stored.review_count;

        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_tutors(&self) -> Result<Vec<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().filter(|u| u.is_tutor()).cloned().collect())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryUserRepository {
    async fn upsert_review(&self, review: Review) -> Result<ReviewSummary, DomainError> {
        let mut guard = self.store.write().await;
        let store = &mut *guard;
        let tutor_id = review.tutor_id;

        let tutor = store
            .users
            .get_mut(&tutor_id)
            .ok_or_else(|| DomainError::not_found("Tutor"))?;

        let reviews = store.reviews.entry(tutor_id).or_default();
        upsert_review(reviews, review);
        let summary = ReviewSummary::compute(reviews);
        tutor.apply_review_summary(summary);

        Ok(summary)
    }

    async fn list_for_tutor(&self, tutor_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let store = self.store.read().await;
        let mut reviews = store.reviews.get(&tutor_id).cloned().unwrap_or_default();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}
