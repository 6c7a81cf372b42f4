//! Configuration for the OTP service

use tc_shared::config::{OtpConfig, SmsConfig};

use crate::domain::entities::otp_challenge::{DEFAULT_EXPIRY_SECONDS, MAX_ATTEMPTS};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds before a challenge expires
    pub expiry_seconds: i64,
    /// Wrong guesses allowed before the challenge is exhausted
    pub max_attempts: u32,
    /// Dialing prefix added to local numbers for SMS dispatch
    pub country_prefix: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
            max_attempts: MAX_ATTEMPTS,
            country_prefix: String::from("+91"),
        }
    }
}

impl OtpServiceConfig {
    pub fn from_settings(otp: &OtpConfig, sms: &SmsConfig) -> Self {
        Self {
            expiry_seconds: otp.expiry_seconds,
            max_attempts: otp.max_attempts,
            country_prefix: sms.country_prefix.clone(),
        }
    }
}
