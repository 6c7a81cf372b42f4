use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{validate_rating, Review};
use crate::domain::value_objects::ReviewList;
use crate::errors::{AuthError, DomainResult, MarketplaceError};
use crate::repositories::{ReviewRepository, UserRepository};

/// Stored review together with the tutor's recomputed aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub review: Review,
    pub rating: f64,
    pub review_count: u32,
}

pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { reviews, users }
    }

    /// Create or overwrite the reviewer's review of a tutor
    ///
    /// A reviewer holds at most one review per tutor; a second submission
    /// replaces rating, comment and timestamp. The tutor's rating is then the
    /// mean of all current reviews, recomputed from scratch.
    ///
    /// # Errors
    ///
    /// * `MarketplaceError::InvalidRating` - Rating outside `[1, 5]`
    /// * `MarketplaceError::SelfReview` - Tutor reviewing themselves
    /// * `MarketplaceError::TutorNotFound` / `NotATutor` - Bad target
    pub async fn add_or_update_review(
        &self,
        tutor_id: Uuid,
        reviewer_id: Uuid,
        rating: i64,
        comment: &str,
    ) -> DomainResult<ReviewOutcome> {
        let rating = validate_rating(rating)?;
        if tutor_id == reviewer_id {
            return Err(MarketplaceError::SelfReview.into());
        }

        let tutor = self
            .users
            .find_by_id(tutor_id)
            .await?
            .ok_or(MarketplaceError::TutorNotFound)?;
        if !tutor.is_tutor() {
            return Err(MarketplaceError::NotATutor.into());
        }
        let reviewer = self
            .users
            .find_by_id(reviewer_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let review = Review::new(
            tutor_id,
            reviewer_id,
            reviewer.name,
            rating,
            comment.trim().to_string(),
        );
        let summary = self.reviews.upsert_review(review.clone()).await?;

        tracing::info!(
            tutor_id = %tutor_id,
            reviewer_id = %reviewer_id,
            rating,
            review_count = summary.review_count,
            event = "review_saved",
            "Review saved and rating recomputed"
        );

        Ok(ReviewOutcome {
            review,
            rating: summary.rating,
            review_count: summary.review_count,
        })
    }

    /// Reviews of a tutor, newest first, with the stored aggregate
    pub async fn list_reviews(&self, tutor_id: Uuid) -> DomainResult<ReviewList> {
        let tutor = self
            .users
            .find_by_id(tutor_id)
            .await?
            .filter(|u| u.is_tutor())
            .ok_or(MarketplaceError::TutorNotFound)?;
        let reviews = self.reviews.list_for_tutor(tutor_id).await?;
        Ok(ReviewList {
            reviews,
            rating: tutor.rating,
            review_count: tutor.review_count,
        })
    }
}
