//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the TutorConnect
//! application. It provides concrete implementations of the repository and
//! gateway traits declared in `tc_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis-backed OTP challenge store
//! - **SMS**: SMS gateway clients (Twilio, console mock)
//! - **Payment**: Razorpay order creation and signature checks
//! - **AI**: Gemini client for the homework assistant
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis OTP storage (default)

use tc_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and OTP storage
#[cfg(feature = "redis-cache")]
pub mod cache;

/// SMS service module - External SMS providers
pub mod sms;

/// Payment gateway module
pub mod payment;

/// Generative model client for hints
pub mod ai;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Payment or AI gateway returned an unusable response
    #[error("{service} gateway error: {message}")]
    Gateway { service: &'static str, message: String },

    /// Stored data could not be mapped back to a domain type
    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Http(e) => DomainError::External {
                service: "http".to_string(),
                message: e.to_string(),
            },
            InfrastructureError::Sms(message) => DomainError::External {
                service: "sms".to_string(),
                message,
            },
            InfrastructureError::Gateway { service, message } => DomainError::External {
                service: service.to_string(),
                message,
            },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
