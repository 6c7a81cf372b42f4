//! Storage for pending phone verification challenges.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{ChallengeVerdict, OtpChallenge};
use crate::errors::DomainError;

/// Keyed store of OTP challenges, one per raw phone number.
///
/// `get` may return an expired challenge that has not been reaped yet; the
/// state machine checks expiry itself.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store `challenge`, overwriting any previous one for the same phone.
    /// The entry must not outlive `challenge.expires_at` by more than one
    /// sweep interval.
    async fn save(&self, challenge: &OtpChallenge) -> Result<(), DomainError>;

    /// Fetch the challenge for `phone`
    async fn get(&self, phone: &str) -> Result<Option<OtpChallenge>, DomainError>;

    /// Check `candidate` against the challenge for `phone` and persist the
    /// outcome as one step per phone: a rejected guess is counted, every
    /// other verdict removes the challenge. Concurrent calls for the same
    /// phone must observe each other's attempts, and at most one of them may
    /// be `Accepted`.
    ///
    /// Returns `None` when no challenge is stored.
    async fn evaluate(
        &self,
        phone: &str,
        candidate: &str,
        now: DateTime<Utc>,
        max_attempts: u32,
    ) -> Result<Option<ChallengeVerdict>, DomainError>;

    /// Remove the challenge for `phone`. Returns whether one existed.
    async fn remove(&self, phone: &str) -> Result<bool, DomainError>;

    /// Drop every challenge that expired before `now`. Stores with native
    /// expiry return 0.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
