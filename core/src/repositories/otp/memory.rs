//! Single-instance OTP store.
//!
//! Entries are reaped lazily on verify and periodically by `OtpSweeper`.
//! State is not shared between processes; multi-instance deployments use the
//! Redis store instead.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{ChallengeVerdict, OtpChallenge};
use crate::errors::DomainError;

use super::trait_::OtpStore;

#[derive(Clone, Default)]
pub struct InMemoryOtpStore {
    challenges: Arc<RwLock<HashMap<String, OtpChallenge>>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored challenges
    pub async fn len(&self) -> usize {
        self.challenges.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.challenges.read().await.is_empty()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn save(&self, challenge: &OtpChallenge) -> Result<(), DomainError> {
        let mut challenges = self.challenges.write().await;
        challenges.insert(challenge.phone.clone(), challenge.clone());
        Ok(())
    }

    async fn get(&self, phone: &str) -> Result<Option<OtpChallenge>, DomainError> {
        let challenges = self.challenges.read().await;
        Ok(challenges.get(phone).cloned())
    }

    async fn evaluate(
        &self,
        phone: &str,
        candidate: &str,
        now: DateTime<Utc>,
        max_attempts: u32,
    ) -> Result<Option<ChallengeVerdict>, DomainError> {
        let mut challenges = self.challenges.write().await;
        let Some(challenge) = challenges.get_mut(phone) else {
            return Ok(None);
        };
        let verdict = challenge.evaluate(candidate, now, max_attempts);
        if verdict.consumes_challenge() {
            challenges.remove(phone);
        }
        Ok(Some(verdict))
    }

    async fn remove(&self, phone: &str) -> Result<bool, DomainError> {
        let mut challenges = self.challenges.write().await;
        Ok(challenges.remove(phone).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut challenges = self.challenges.write().await;
        let before = challenges.len();
        challenges.retain(|_, challenge| !challenge.is_expired_at(now));
        Ok(before - challenges.len())
    }
}
