//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT issuance configuration
//! - `cache` - Redis connection configuration
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `integrations` - SMS gateway, payment gateway and AI model credentials
//! - `otp` - Phone verification challenge settings
//! - `server` - HTTP server and CORS configuration
//!
//! Every struct offers `Default` plus `from_env()`; `.env` files are loaded by
//! the binary before any of these are read.

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod integrations;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use integrations::{AiConfig, PaymentConfig, SmsConfig, SmsProviderKind};
pub use otp::{OtpConfig, OtpStoreKind};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,

    /// `None` when `DATABASE_URL` is unset; in-memory stores are used instead
    pub database: Option<DatabaseConfig>,

    pub cache: CacheConfig,
    pub jwt: JwtConfig,
    pub otp: OtpConfig,
    pub sms: SmsConfig,
    pub payment: PaymentConfig,
    pub ai: AiConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: None,
            cache: CacheConfig::default(),
            jwt: JwtConfig::default(),
            otp: OtpConfig::default(),
            sms: SmsConfig::default(),
            payment: PaymentConfig::default(),
            ai: AiConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
            otp: OtpConfig::from_env(),
            sms: SmsConfig::from_env(),
            payment: PaymentConfig::from_env(),
            ai: AiConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, "Ignoring malformed environment value");
            default
        }),
        Err(_) => default,
    }
}

/// Read a string environment variable with a default.
pub(crate) fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_memory_backends() {
        let config = AppConfig::default();
        assert!(config.database.is_none());
        assert_eq!(config.otp.store, OtpStoreKind::Memory);
        assert_eq!(config.sms.provider, SmsProviderKind::Mock);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        std::env::set_var("TC_TEST_ENV_OR", "not-a-number");
        assert_eq!(env_or("TC_TEST_ENV_OR", 42u64), 42);
        std::env::set_var("TC_TEST_ENV_OR", " 7 ");
        assert_eq!(env_or("TC_TEST_ENV_OR", 42u64), 7);
        std::env::remove_var("TC_TEST_ENV_OR");
    }
}
