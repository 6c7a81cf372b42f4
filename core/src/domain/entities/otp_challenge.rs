//! Phone verification challenge and its state transitions.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of digits in a code
pub const CODE_LENGTH: usize = 6;

/// Lifetime of a challenge in seconds
pub const DEFAULT_EXPIRY_SECONDS: i64 = 300;

/// Failed attempts allowed before the challenge is exhausted
pub const MAX_ATTEMPTS: u32 = 3;

/// Pending challenge for one phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// Raw phone number the challenge is keyed by
    pub phone: String,

    /// Six-digit numeric code
    pub code: String,

    pub expires_at: DateTime<Utc>,

    /// Failed verify calls so far
    pub attempts: u32,

    pub created_at: DateTime<Utc>,
}

/// Result of checking a candidate code against a stored challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeVerdict {
    /// Code matched; the challenge must be removed
    Accepted,
    /// Past `expires_at`; the challenge must be removed
    Expired,
    /// Attempt cap reached; the challenge must be removed
    Exhausted,
    /// Wrong code; the incremented challenge must be persisted
    Rejected { remaining: u32 },
}

impl ChallengeVerdict {
    /// Whether the stored challenge should be deleted after this verdict
    pub fn consumes_challenge(&self) -> bool {
        !matches!(self, ChallengeVerdict::Rejected { .. })
    }
}

impl OtpChallenge {
    /// Issues a challenge with a fresh random code
    pub fn issue(phone: impl Into<String>, ttl: Duration) -> Self {
        Self::with_code(phone, Self::generate_code(), ttl)
    }

    /// Creates a challenge with a known code
    pub fn with_code(phone: impl Into<String>, code: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            phone: phone.into(),
            code: code.into(),
            expires_at: now + ttl,
            attempts: 0,
            created_at: now,
        }
    }

    /// Uniformly random code in `[100000, 999999]`
    pub fn generate_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        code.to_string()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Seconds left before expiry, never negative
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    /// Constant-time comparison against the stored code
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq::constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Checks `candidate` in order: expiry, attempt cap, match.
    ///
    /// A wrong code increments `attempts`; the caller persists the challenge
    /// for `Rejected` and deletes it for every other verdict.
    pub fn evaluate(&mut self, candidate: &str, now: DateTime<Utc>, max_attempts: u32) -> ChallengeVerdict {
        if self.is_expired_at(now) {
            return ChallengeVerdict::Expired;
        }
        if self.is_exhausted(max_attempts) {
            return ChallengeVerdict::Exhausted;
        }
        if self.matches(candidate) {
            return ChallengeVerdict::Accepted;
        }
        self.attempts += 1;
        ChallengeVerdict::Rejected {
            remaining: max_attempts.saturating_sub(self.attempts),
        }
    }
}
