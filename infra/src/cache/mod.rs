//! Cache module for Redis-backed storage
//!
//! Shared OTP challenges live here when more than one server instance runs.

pub mod otp_storage;
pub mod redis_client;

pub use otp_storage::RedisOtpStore;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use tc_shared::config::CacheConfig;
