//! Authentication configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// JWT configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: i64,

    /// Token issuer
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-this-secret-in-production"),
            expiry_seconds: default_expiry_seconds(),
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load from `JWT_SECRET`, `JWT_EXPIRY_SECONDS` and `JWT_ISSUER`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_string("JWT_SECRET", &defaults.secret),
            expiry_seconds: env_or("JWT_EXPIRY_SECONDS", defaults.expiry_seconds),
            issuer: env_string("JWT_ISSUER", &defaults.issuer),
        }
    }

    /// Set the token lifetime
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.expiry_seconds = seconds;
        self
    }
}

fn default_expiry_seconds() -> i64 {
    7 * 24 * 3600 // 7 days
}

fn default_issuer() -> String {
    String::from("tutorconnect")
}
