//! Public projections of users, tutors and conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    AuthProvider, ConversationDigest, Message, PaymentStatus, Review, User, UserRole,
};

/// A user's own record, as returned by `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub auth_provider: AuthProvider,
    pub phone: Option<String>,
    pub phone_verified: bool,
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor_profile: Option<TutorCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            auth_provider: user.auth_provider,
            phone: user.phone.clone(),
            phone_verified: user.phone_verified,
            profile_picture: user.profile_picture.clone(),
            tutor_profile: user.is_tutor().then(|| TutorCard::from(user)),
            payment_status: user.tutor_profile.as_ref().map(|p| p.payment.status),
            created_at: user.created_at,
        }
    }
}

/// Tutor as shown in listings, favorites and the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorCard {
    pub id: Uuid,
    pub name: String,
    pub profile_picture: Option<String>,
    pub subjects: Vec<String>,
    pub qualifications: String,
    pub monthly_rate: u32,
    pub bio: String,
    pub classes: Vec<String>,
    pub available_time_slots: Vec<String>,
    pub location: Option<String>,
    pub profile_completed: bool,
    pub rating: f64,
    pub review_count: u32,
}

impl From<&User> for TutorCard {
    fn from(user: &User) -> Self {
        let profile = user.tutor_profile.clone().unwrap_or_default();
        Self {
            id: user.id,
            name: user.name.clone(),
            profile_picture: user.profile_picture.clone(),
            subjects: profile.subjects,
            qualifications: profile.qualifications,
            monthly_rate: profile.monthly_rate,
            bio: profile.bio,
            classes: profile.classes,
            available_time_slots: profile.available_time_slots,
            location: profile.location,
            profile_completed: profile.profile_completed,
            rating: user.rating,
            review_count: user.review_count,
        }
    }
}

/// The other side of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub id: Uuid,
    pub name: String,
    pub profile_picture: Option<String>,
    pub role: UserRole,
}

impl From<&User> for ParticipantSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            profile_picture: user.profile_picture.clone(),
            role: user.role,
        }
    }
}

/// One entry of a user's inbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub other_participant: ParticipantSummary,
    pub last_message: Message,
    pub unread_count: u64,
}

impl ConversationSummary {
    pub fn from_digest(digest: ConversationDigest, other: &User) -> Self {
        Self {
            conversation_id: digest.conversation_id,
            other_participant: ParticipantSummary::from(other),
            last_message: digest.last_message,
            unread_count: digest.unread_count,
        }
    }
}

/// Reviews of a tutor together with the aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewList {
    pub reviews: Vec<Review>,
    pub rating: f64,
    pub review_count: u32,
}
