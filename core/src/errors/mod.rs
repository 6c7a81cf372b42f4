//! Domain-specific error types and error handling.

mod types;

pub use types::{
    AuthError, ConversationError, MarketplaceError, OtpError, TokenError, ValidationError,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{message}")]
    BusinessRule { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// A third-party collaborator (SMS, payment, AI) failed
    #[error("{service} request failed: {message}")]
    External { service: String, message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Conversation(#[from] ConversationError),

    #[error(transparent)]
    Marketplace(#[from] MarketplaceError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification used by the presentation layer to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input
    Validation,
    /// Missing, invalid or expired credentials
    Unauthorized,
    /// Authenticated but not allowed
    Forbidden,
    NotFound,
    /// Uniqueness violation (duplicate account)
    Conflict,
    /// Request was well formed but the current state rejects it
    DomainState,
    /// A third-party collaborator failed
    Upstream,
    Internal,
}

impl DomainError {
    /// Convenience constructor for internal failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Convenience constructor for missing resources
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::BusinessRule { .. } => ErrorKind::DomainState,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::Unauthorized | DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::External { .. } => ErrorKind::Upstream,
            DomainError::Auth(err) => match err {
                AuthError::UserAlreadyExists => ErrorKind::Conflict,
                AuthError::InvalidCredentials | AuthError::SocialAccount => ErrorKind::Unauthorized,
                AuthError::UserNotFound => ErrorKind::NotFound,
                AuthError::InsufficientPermissions => ErrorKind::Forbidden,
                AuthError::PasswordHashFailed => ErrorKind::Internal,
            },
            DomainError::Otp(err) => match err {
                OtpError::InvalidPhoneFormat => ErrorKind::Validation,
                OtpError::SmsServiceFailure { .. } => ErrorKind::Upstream,
                _ => ErrorKind::DomainState,
            },
            DomainError::Conversation(err) => match err {
                ConversationError::NotParticipant => ErrorKind::Forbidden,
                ConversationError::InvalidConversationId | ConversationError::SelfMessage => {
                    ErrorKind::Validation
                }
                ConversationError::RecipientNotFound => ErrorKind::NotFound,
            },
            DomainError::Marketplace(err) => match err {
                MarketplaceError::TutorNotFound | MarketplaceError::NotInFavorites => {
                    ErrorKind::NotFound
                }
                MarketplaceError::NotAParent => ErrorKind::Forbidden,
                MarketplaceError::InvalidRating => ErrorKind::Validation,
                _ => ErrorKind::DomainState,
            },
        }
    }
}
