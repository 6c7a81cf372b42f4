//! Tutor reviews and the rating aggregate derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::MarketplaceError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A review left on a tutor. At most one per reviewer and tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub tutor_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewer_name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(tutor_id: Uuid, reviewer_id: Uuid, reviewer_name: String, rating: u8, comment: String) -> Self {
        Self {
            tutor_id,
            reviewer_id,
            reviewer_name,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}

/// Checks that a rating lies in `[1, 5]`
pub fn validate_rating(rating: i64) -> Result<u8, MarketplaceError> {
    if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating) {
        Ok(rating as u8)
    } else {
        Err(MarketplaceError::InvalidRating)
    }
}

/// Inserts `review` or overwrites the reviewer's existing one in place.
///
/// Returns `true` when a new review was appended.
pub fn upsert_review(reviews: &mut Vec<Review>, review: Review) -> bool {
    match reviews
        .iter_mut()
        .find(|r| r.reviewer_id == review.reviewer_id && r.tutor_id == review.tutor_id)
    {
        Some(existing) => {
            existing.rating = review.rating;
            existing.comment = review.comment;
            existing.reviewer_name = review.reviewer_name;
            existing.created_at = review.created_at;
            false
        }
        None => {
            reviews.push(review);
            true
        }
    }
}

/// Denormalized rating aggregate stored on the tutor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Arithmetic mean of all ratings, 0 when there are none
    pub rating: f64,
    pub review_count: u32,
}

impl ReviewSummary {
    /// Full recompute from the current set of reviews
    pub fn compute(reviews: &[Review]) -> Self {
        Self::from_ratings(reviews.iter().map(|r| r.rating))
    }

    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Self {
        let (sum, count) = ratings
            .into_iter()
            .fold((0u64, 0u32), |(sum, count), r| (sum + u64::from(r), count + 1));
        let rating = if count == 0 { 0.0 } else { sum as f64 / f64::from(count) };
        Self {
            rating,
            review_count: count,
        }
    }
}
