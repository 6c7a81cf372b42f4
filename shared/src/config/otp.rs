//! Phone verification (OTP) configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Backing store for pending OTP challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpStoreKind {
    /// Process-local map, single instance only
    Memory,
    /// Redis keys with native TTL, shared across instances
    Redis,
}

impl std::str::FromStr for OtpStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(OtpStoreKind::Memory),
            "redis" => Ok(OtpStoreKind::Redis),
            _ => Err(format!("Invalid OTP store: {}", s)),
        }
    }
}

/// OTP challenge configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Challenge lifetime in seconds
    pub expiry_seconds: i64,

    /// Failed attempts allowed before the challenge is exhausted
    pub max_attempts: u32,

    /// Where challenges are kept
    pub store: OtpStoreKind,

    /// How often the in-memory store is swept for expired challenges
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: 300,
            max_attempts: 3,
            store: OtpStoreKind::Memory,
            sweep_interval_seconds: 60,
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_EXPIRY_SECONDS`, `OTP_MAX_ATTEMPTS`, `OTP_STORE` and
    /// `OTP_SWEEP_INTERVAL_SECONDS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            expiry_seconds: env_or("OTP_EXPIRY_SECONDS", defaults.expiry_seconds),
            max_attempts: env_or("OTP_MAX_ATTEMPTS", defaults.max_attempts),
            store: env_or("OTP_STORE", defaults.store),
            sweep_interval_seconds: env_or(
                "OTP_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_defaults() {
        let config = OtpConfig::default();
        assert_eq!(config.expiry_seconds, 300);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.store, OtpStoreKind::Memory);
    }

    #[test]
    fn test_store_kind_parsing() {
        assert_eq!("REDIS".parse::<OtpStoreKind>(), Ok(OtpStoreKind::Redis));
        assert_eq!("in-memory".parse::<OtpStoreKind>(), Ok(OtpStoreKind::Memory));
        assert!("disk".parse::<OtpStoreKind>().is_err());
    }
}
