//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// Redis connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Prefix applied to every key written by this service
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            key_prefix: default_key_prefix(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl CacheConfig {
    /// Load from `REDIS_URL`, `REDIS_KEY_PREFIX` and `REDIS_CONNECTION_TIMEOUT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env_string("REDIS_URL", &defaults.url),
            key_prefix: env_string("REDIS_KEY_PREFIX", &defaults.key_prefix),
            connection_timeout: env_or("REDIS_CONNECTION_TIMEOUT", defaults.connection_timeout),
        }
    }

    /// Build a namespaced key
    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.key_prefix, suffix)
    }
}

fn default_key_prefix() -> String {
    String::from("tutorconnect:")
}

fn default_connection_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_prefixed() {
        let config = CacheConfig::default();
        assert_eq!(config.key("otp:9876543210"), "tutorconnect:otp:9876543210");
    }
}
