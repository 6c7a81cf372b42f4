//! Credentials and endpoints for third-party collaborators

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// SMS provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProviderKind {
    /// Logs the message instead of sending it
    Mock,
    /// Twilio Messages API
    Twilio,
}

impl std::str::FromStr for SmsProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SmsProviderKind::Mock),
            "twilio" => Ok(SmsProviderKind::Twilio),
            _ => Err(format!("Invalid SMS provider: {}", s)),
        }
    }
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    pub provider: SmsProviderKind,

    /// Prefix prepended to 10-digit local numbers before dispatch
    pub country_prefix: String,

    #[serde(default)]
    pub twilio_account_sid: String,
    #[serde(default, skip_serializing)]
    pub twilio_auth_token: String,
    #[serde(default)]
    pub twilio_from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProviderKind::Mock,
            country_prefix: String::from("+91"),
            twilio_account_sid: String::new(),
            twilio_auth_token: String::new(),
            twilio_from_number: String::new(),
        }
    }
}

impl SmsConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("SMS_PROVIDER", defaults.provider),
            country_prefix: env_string("SMS_COUNTRY_PREFIX", &defaults.country_prefix),
            twilio_account_sid: env_string("TWILIO_ACCOUNT_SID", ""),
            twilio_auth_token: env_string("TWILIO_AUTH_TOKEN", ""),
            twilio_from_number: env_string("TWILIO_PHONE_NUMBER", ""),
        }
    }
}

/// Payment gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    pub key_id: String,

    #[serde(default, skip_serializing)]
    pub key_secret: String,

    /// One-time tutor registration fee in the smallest currency unit
    pub registration_fee: u64,

    pub currency: String,

    pub base_url: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: String::new(),
            registration_fee: 50_000, // 500.00 INR
            currency: String::from("INR"),
            base_url: String::from("https://api.razorpay.com/v1"),
        }
    }
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_id: env_string("RAZORPAY_KEY_ID", ""),
            key_secret: env_string("RAZORPAY_KEY_SECRET", ""),
            registration_fee: env_or("REGISTRATION_FEE_PAISE", defaults.registration_fee),
            currency: env_string("PAYMENT_CURRENCY", &defaults.currency),
            base_url: env_string("RAZORPAY_BASE_URL", &defaults.base_url),
        }
    }

    /// Whether gateway credentials were supplied
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }
}

/// Generative model configuration for the homework assistant
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: String::from("gemini-1.5-flash"),
            base_url: String::from("https://generativelanguage.googleapis.com/v1beta"),
            timeout_seconds: 30,
        }
    }
}

impl AiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env_string("AI_API_KEY", ""),
            model: env_string("AI_MODEL", &defaults.model),
            base_url: env_string("AI_BASE_URL", &defaults.base_url),
            timeout_seconds: env_or("AI_TIMEOUT_SECONDS", defaults.timeout_seconds),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
