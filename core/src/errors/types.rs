//! Domain-specific error types for authentication, messaging, phone
//! verification and marketplace operations.
//!
//! Display strings are user-facing: the API layer forwards them verbatim as
//! the `message` of an error body.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("This account uses Google sign-in")]
    SocialAccount,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Password hashing failed")]
    PasswordHashFailed,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("No token provided")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Phone verification (OTP) errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Invalid phone number. Please enter a valid 10-digit mobile number")]
    InvalidPhoneFormat,

    #[error("OTP not found or expired")]
    NotFound,

    #[error("OTP has expired. Please request a new one")]
    Expired,

    #[error("Too many attempts. Please request a new OTP")]
    TooManyAttempts,

    #[error("Invalid OTP. {remaining} attempts remaining")]
    InvalidCode { remaining: u32 },

    #[error("Failed to send OTP: {reason}")]
    SmsServiceFailure { reason: String },
}

/// Conversation and message errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Not authorized to access this conversation")]
    NotParticipant,

    #[error("Invalid conversation id")]
    InvalidConversationId,

    #[error("Recipient not found")]
    RecipientNotFound,

    #[error("Cannot send a message to yourself")]
    SelfMessage,
}

/// Favorites, reviews, tutor profile and registration payment errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceError {
    #[error("Tutor not found")]
    TutorNotFound,

    #[error("User is not a tutor")]
    NotATutor,

    #[error("Only parents can manage favorites")]
    NotAParent,

    #[error("Tutor already in favorites")]
    AlreadyFavorited,

    #[error("Tutor not in favorites")]
    NotInFavorites,

    #[error("You cannot review yourself")]
    SelfReview,

    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("Registration fee already paid")]
    AlreadyPaid,

    #[error("Payment verification failed")]
    InvalidPaymentSignature,
}
