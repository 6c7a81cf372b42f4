//! SMS Service Module
//!
//! SMS gateway clients used to deliver OTP codes.
//!
//! - **SMS Service Trait**: Common interface for all providers
//! - **Mock Implementation**: Logs messages for development
//! - **Twilio**: Production delivery through the Twilio REST API
//! - **Adapter**: Bridges any provider to the core `SmsServiceTrait`

use std::sync::Arc;

use tc_core::services::SmsServiceTrait;
use tc_shared::config::{SmsConfig, SmsProviderKind};

pub mod mock_sms;
pub mod sms_service;
pub mod trait_adapter;
pub mod twilio;

pub use mock_sms::MockSmsService;
pub use sms_service::{is_valid_e164, SmsService};
pub use trait_adapter::SmsServiceAdapter;
pub use twilio::{TwilioConfig, TwilioSmsService};

/// Create an SMS service based on configuration
///
/// Falls back to the mock service when Twilio is selected but its
/// credentials are incomplete.
pub fn create_sms_service(config: &SmsConfig) -> Arc<dyn SmsServiceTrait> {
    match config.provider {
        SmsProviderKind::Mock => Arc::new(SmsServiceAdapter::new(MockSmsService::new())),
        SmsProviderKind::Twilio => match TwilioSmsService::new(TwilioConfig::from(config)) {
            Ok(service) => {
                tracing::info!(provider = service.provider_name(), "SMS service initialized");
                Arc::new(SmsServiceAdapter::new(service))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize Twilio SMS service");
                tracing::warn!("Falling back to mock SMS service");
                Arc::new(SmsServiceAdapter::new(MockSmsService::new()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_incomplete_twilio_config_falls_back_to_mock() {
        let config = SmsConfig {
            provider: SmsProviderKind::Twilio,
            ..Default::default()
        };
        let service = create_sms_service(&config);
        let message_id = service
            .send_verification_code("+919876543210", "123456")
            .await
            .unwrap();
        assert!(message_id.starts_with("mock_"));
    }
}
