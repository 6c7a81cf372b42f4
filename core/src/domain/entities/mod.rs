//! Domain entities representing core business objects.

pub mod favorite;
pub mod message;
pub mod otp_challenge;
pub mod payment;
pub mod review;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use favorite::Favorite;
pub use message::{
    conversation_participants, derive_conversation_id, is_participant, summarize_conversations,
    ConversationDigest, Message, CONVERSATION_ID_SEPARATOR,
};
pub use otp_challenge::{
    ChallengeVerdict, OtpChallenge, CODE_LENGTH, DEFAULT_EXPIRY_SECONDS, MAX_ATTEMPTS,
};
pub use payment::{registration_receipt, PaymentOrder};
pub use review::{upsert_review, validate_rating, Review, ReviewSummary, MAX_RATING, MIN_RATING};
pub use token::Claims;
pub use user::{
    AuthProvider, PaymentStatus, RegistrationPayment, TutorProfile, TutorProfileUpdate, User,
    UserRole,
};
