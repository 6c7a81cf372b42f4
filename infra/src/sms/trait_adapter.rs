//! SMS Service Trait Adapter
//!
//! Implements the core `SmsServiceTrait` for any infrastructure
//! `SmsService`, so the OTP service never sees provider error types.

use async_trait::async_trait;

use tc_core::services::SmsServiceTrait;

use super::sms_service::SmsService;

/// Adapter that implements the core SmsServiceTrait for an SMS provider
pub struct SmsServiceAdapter<S> {
    inner: S,
}

impl<S: SmsService> SmsServiceAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SmsService> SmsServiceTrait for SmsServiceAdapter<S> {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(phone, code)
            .await
            .map_err(|e| e.to_string())
    }
}
