//! OTP challenge state machine
//!
//! `absent -> pending -> {verified, expired, exhausted}`, with `pending`
//! looping on a wrong guess until the attempt cap is reached.

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use tc_shared::phone::{is_valid_indian_mobile, mask_phone_number, with_country_prefix};

use crate::domain::entities::{ChallengeVerdict, OtpChallenge};
use crate::domain::value_objects::PublicUser;
use crate::errors::{AuthError, DomainError, DomainResult, OtpError, ValidationError};
use crate::repositories::{OtpStore, UserRepository};

use super::config::OtpServiceConfig;
use super::traits::SmsServiceTrait;
use super::types::{SendOtpResult, VerifyOtpResult};

/// Phone verification service
pub struct OtpService {
    store: Arc<dyn OtpStore>,
    sms_service: Arc<dyn SmsServiceTrait>,
    users: Arc<dyn UserRepository>,
    config: OtpServiceConfig,
}

impl OtpService {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `store` - Where pending challenges are kept
    /// * `sms_service` - SMS gateway used to deliver codes
    /// * `users` - User store, updated when an authenticated caller verifies
    /// * `config` - Expiry, attempt cap and dialing prefix
    pub fn new(
        store: Arc<dyn OtpStore>,
        sms_service: Arc<dyn SmsServiceTrait>,
        users: Arc<dyn UserRepository>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            sms_service,
            users,
            config,
        }
    }

    /// Issue a challenge for `phone` and send the code by SMS
    ///
    /// Any pending challenge for the number is overwritten. If the SMS
    /// dispatch fails the new challenge stays stored and the failure is
    /// reported to the caller.
    ///
    /// # Errors
    ///
    /// * `OtpError::InvalidPhoneFormat` - Not a 10-digit number starting with 6-9
    /// * `OtpError::SmsServiceFailure` - The gateway rejected the message
    pub async fn issue(&self, phone: &str) -> DomainResult<SendOtpResult> {
        if !is_valid_indian_mobile(phone) {
            return Err(OtpError::InvalidPhoneFormat.into());
        }

        let challenge = OtpChallenge::issue(phone, Duration::seconds(self.config.expiry_seconds));
        self.store.save(&challenge).await.map_err(|e| {
            tracing::error!(
                phone = %mask_phone_number(phone),
                error = %e,
                event = "otp_storage_failed",
                "Failed to store OTP challenge"
            );
            e
        })?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_generated",
            expires_at = %challenge.expires_at,
            "Generated new OTP challenge"
        );

        let destination = with_country_prefix(phone, &self.config.country_prefix);
        let message_id = self
            .sms_service
            .send_verification_code(&destination, &challenge.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_dispatch_failed",
                    "SMS gateway failed to deliver OTP"
                );
                DomainError::from(OtpError::SmsServiceFailure { reason: e })
            })?;

        Ok(SendOtpResult {
            expires_in: self.config.expiry_seconds,
            message_id,
        })
    }

    /// Check `code` against the pending challenge for `phone`
    ///
    /// On success the challenge is consumed. When `caller` is set, the phone
    /// is saved on that user's record and marked verified.
    ///
    /// # Errors
    ///
    /// * `OtpError::NotFound` - No pending challenge
    /// * `OtpError::Expired` - Challenge expired; it is deleted
    /// * `OtpError::TooManyAttempts` - Attempt cap reached; it is deleted
    /// * `OtpError::InvalidCode` - Wrong code; remaining attempts in the message
    pub async fn verify(
        &self,
        phone: &str,
        code: &str,
        caller: Option<Uuid>,
    ) -> DomainResult<VerifyOtpResult> {
        if phone.is_empty() {
            return Err(ValidationError::RequiredField { field: "phone".into() }.into());
        }
        if code.is_empty() {
            return Err(ValidationError::RequiredField { field: "otp".into() }.into());
        }

        let verdict = self
            .store
            .evaluate(phone, code, Utc::now(), self.config.max_attempts)
            .await?
            .ok_or(OtpError::NotFound)?;

        match verdict {
            ChallengeVerdict::Accepted => {
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    event = "otp_verified",
                    "OTP verified"
                );
            }
            ChallengeVerdict::Expired => {
                tracing::info!(phone = %mask_phone_number(phone), event = "otp_expired", "OTP expired");
                return Err(OtpError::Expired.into());
            }
            ChallengeVerdict::Exhausted => {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    event = "otp_exhausted",
                    "OTP attempt cap reached"
                );
                return Err(OtpError::TooManyAttempts.into());
            }
            ChallengeVerdict::Rejected { remaining } => {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    remaining,
                    event = "otp_rejected",
                    "Wrong OTP"
                );
                return Err(OtpError::InvalidCode { remaining }.into());
            }
        }

        let user = match caller {
            Some(user_id) => Some(self.attach_phone(user_id, phone).await?),
            None => None,
        };

        Ok(VerifyOtpResult {
            phone: phone.to_string(),
            verified: true,
            user,
        })
    }

    /// Discard any pending challenge for `phone` and issue a new one
    pub async fn resend(&self, phone: &str) -> DomainResult<SendOtpResult> {
        if !is_valid_indian_mobile(phone) {
            return Err(OtpError::InvalidPhoneFormat.into());
        }
        if self.store.remove(phone).await? {
            tracing::debug!(phone = %mask_phone_number(phone), "Discarded pending OTP for resend");
        }
        self.issue(phone).await
    }

    async fn attach_phone(&self, user_id: Uuid, phone: &str) -> DomainResult<PublicUser> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        user.verify_phone(phone.to_string());
        let user = self.users.update(user).await?;
        tracing::info!(user_id = %user.id, event = "phone_verified", "Saved verified phone");
        Ok(PublicUser::from(&user))
    }
}
