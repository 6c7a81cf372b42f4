//! Redis implementation of the OTP challenge store
//!
//! Each challenge is one JSON value under `{prefix}otp:{phone}` whose TTL is
//! the challenge's remaining lifetime, so Redis reaps expired entries itself.
//! Verification attempts are counted with `INCR` on `{prefix}otp:{phone}:attempts`
//! and the challenge is consumed by whichever caller's `DEL` removes it, so
//! concurrent verifications cannot exceed the attempt cap or share a code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use tc_core::domain::entities::{ChallengeVerdict, OtpChallenge};
use tc_core::errors::DomainError;
use tc_core::repositories::OtpStore;
use tc_shared::phone::mask_phone_number;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

pub struct RedisOtpStore {
    client: RedisClient,
}

impl RedisOtpStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, phone: &str) -> String {
        self.client.key(&format!("otp:{}", phone))
    }

    fn attempts_key(&self, phone: &str) -> String {
        self.client.key(&format!("otp:{}:attempts", phone))
    }
}

/// Fold the verifications counted before this one into the stored attempts.
/// `call` is this caller's `INCR` result, so `call - 1` callers came first.
fn count_earlier_calls(challenge: &mut OtpChallenge, call: i64) {
    let earlier = u32::try_from(call.saturating_sub(1)).unwrap_or(u32::MAX);
    challenge.attempts = challenge.attempts.saturating_add(earlier);
}

/// Seconds left before `challenge` expires, at least one so the write lands
fn ttl_seconds(challenge: &OtpChallenge, now: DateTime<Utc>) -> u64 {
    challenge.remaining_seconds(now).max(1) as u64
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn save(&self, challenge: &OtpChallenge) -> Result<(), DomainError> {
        let value = serde_json::to_string(challenge)
            .map_err(|e| DomainError::internal(format!("Failed to encode OTP challenge: {}", e)))?;
        let ttl = ttl_seconds(challenge, Utc::now());

        self.client
            .replace_with_expiry(
                &self.key(&challenge.phone),
                &value,
                ttl,
                &self.attempts_key(&challenge.phone),
            )
            .await?;
        debug!(phone = %mask_phone_number(&challenge.phone), ttl, "Stored OTP challenge in Redis");
        Ok(())
    }

    async fn get(&self, phone: &str) -> Result<Option<OtpChallenge>, DomainError> {
        let Some(value) = self.client.get(&self.key(phone)).await? else {
            return Ok(None);
        };
        let challenge = serde_json::from_str(&value).map_err(|e| {
            InfrastructureError::Mapping(format!("Corrupt OTP challenge: {}", e))
        })?;
        Ok(Some(challenge))
    }

    async fn evaluate(
        &self,
        phone: &str,
        candidate: &str,
        now: DateTime<Utc>,
        max_attempts: u32,
    ) -> Result<Option<ChallengeVerdict>, DomainError> {
        let Some(mut challenge) = self.get(phone).await? else {
            return Ok(None);
        };
        let key = self.key(phone);
        let attempts_key = self.attempts_key(phone);

        let call = self
            .client
            .increment(&attempts_key, ttl_seconds(&challenge, now))
            .await?;
        count_earlier_calls(&mut challenge, call);

        let verdict = challenge.evaluate(candidate, now, max_attempts);
        match verdict {
            ChallengeVerdict::Accepted => {
                // Only the caller whose DEL removes the challenge may use it.
                let consumed = self.client.delete(&key).await?;
                self.client.delete(&attempts_key).await?;
                if !consumed {
                    debug!(phone = %mask_phone_number(phone), "OTP challenge already consumed");
                    return Ok(None);
                }
            }
            ChallengeVerdict::Expired | ChallengeVerdict::Exhausted => {
                self.client.delete_all(&[key.as_str(), attempts_key.as_str()]).await?;
            }
            ChallengeVerdict::Rejected { remaining } => {
                debug!(phone = %mask_phone_number(phone), remaining, "Counted OTP attempt in Redis");
            }
        }
        Ok(Some(verdict))
    }

    async fn remove(&self, phone: &str) -> Result<bool, DomainError> {
        let key = self.key(phone);
        let attempts_key = self.attempts_key(phone);
        let removed = self
            .client
            .delete_all(&[key.as_str(), attempts_key.as_str()])
            .await?;
        Ok(removed > 0)
    }

    async fn purge_expired(&self, _now: DateTime<Utc>) -> Result<usize, DomainError> {
        Ok(0)
    }
}
