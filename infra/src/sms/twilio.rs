//! Twilio SMS Service Implementation
//!
//! Sends messages through the Twilio Messages REST endpoint using `reqwest`.
//! Failed sends are reported once; the caller decides what to do.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use tc_shared::config::SmsConfig;
use tc_shared::phone::mask_phone_number;

use super::sms_service::{is_valid_e164, SmsService};
use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sending number in E.164 format
    pub from_number: String,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl From<&SmsConfig> for TwilioConfig {
    fn from(config: &SmsConfig) -> Self {
        Self {
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from_number: config.twilio_from_number.clone(),
            api_base: TWILIO_API_BASE.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl TwilioConfig {
    fn validate(&self) -> Result<(), InfrastructureError> {
        if self.account_sid.is_empty() || self.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN must be set".to_string(),
            ));
        }
        if !is_valid_e164(&self.from_number) {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TwilioMessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    message: String,
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );
        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.config.api_base, self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_valid_e164(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            )));
        }

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", phone_number),
                ("From", self.config.from_number.as_str()),
                ("Body", message),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<TwilioErrorResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            error!(
                phone = %mask_phone_number(phone_number),
                status = status.as_u16(),
                reason = %reason,
                "Twilio rejected SMS"
            );
            return Err(InfrastructureError::Sms(format!("Twilio returned {}: {}", status, reason)));
        }

        let body: TwilioMessageResponse = response.json().await?;
        info!(
            phone = %mask_phone_number(phone_number),
            sid = %body.sid,
            "SMS sent via Twilio"
        );
        Ok(body.sid)
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
