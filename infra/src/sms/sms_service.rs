//! SMS Service Interface
//!
//! Defines the trait for SMS providers that send verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Twilio SMS API
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier of the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Send a verification code using the standard message text
    async fn send_verification_code(&self, phone_number: &str, code: &str) -> Result<String, InfrastructureError> {
        let message = format!(
            "Your TutorConnect verification code is {}. It expires in 5 minutes.",
            code
        );
        self.send_sms(phone_number, &message).await
    }

    /// Name of the provider, for logs
    fn provider_name(&self) -> &str;
}

/// Validate phone number format (E.164)
///
/// A leading `+` followed by 10 to 15 digits.
pub fn is_valid_e164(phone: &str) -> bool {
    let Some(digits) = phone.strip_prefix('+') else {
        return false;
    };
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+919876543210"));
        assert!(is_valid_e164("+1234567890"));
        assert!(!is_valid_e164("9876543210"));
        assert!(!is_valid_e164("+91 98765 43210"));
        assert!(!is_valid_e164("+123"));
    }
}
