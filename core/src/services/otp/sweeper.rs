//! Periodic removal of expired OTP challenges
//!
//! Stores with native key expiry report nothing to purge, so running the
//! sweeper against them is harmless.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::errors::DomainError;
use crate::repositories::OtpStore;

/// Background task purging abandoned challenges
pub struct OtpSweeper {
    store: Arc<dyn OtpStore>,
    interval: Duration,
}

impl OtpSweeper {
    pub fn new(store: Arc<dyn OtpStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run a single sweep
    ///
    /// # Returns
    /// Number of challenges removed
    pub async fn run_once(&self) -> Result<usize, DomainError> {
        let purged = self.store.purge_expired(chrono::Utc::now()).await?;
        if purged > 0 {
            info!(purged, event = "otp_swept", "Purged expired OTP challenges");
        } else {
            debug!("OTP sweep found nothing to purge");
        }
        Ok(purged)
    }

    /// Spawn the sweeper on the current tokio runtime
    pub fn start_background_task(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                interval_seconds = self.interval.as_secs(),
                "OTP sweeper started"
            );
            let mut timer = tokio::time::interval(self.interval);
            // The first tick completes immediately
            timer.tick().await;

            loop {
                timer.tick().await;
                if let Err(e) = self.run_once().await {
                    error!(error = %e, "OTP sweep failed");
                }
            }
        })
    }
}
