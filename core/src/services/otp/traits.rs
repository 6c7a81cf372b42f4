//! Traits for SMS gateway integration

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a verification code via SMS
    ///
    /// `phone` already carries the international prefix.
    ///
    /// # Returns
    /// Provider message id on success, a description of the failure otherwise
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;
}
