//! Shared utilities and common types for TutorConnect server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes used on the HTTP surface
//! - Utility functions (phone validation, email validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AiConfig, AppConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, OtpConfig, OtpStoreKind, PaymentConfig, ServerConfig, SmsConfig,
    SmsProviderKind,
};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::{phone, validation};
