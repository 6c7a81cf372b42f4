//! Unit tests for the OTP sweeper

use chrono::Duration;
use std::sync::Arc;

use crate::domain::entities::OtpChallenge;
use crate::repositories::{InMemoryOtpStore, OtpStore};
use crate::services::otp::OtpSweeper;

#[tokio::test]
async fn test_run_once_purges_only_expired() {
    let store = Arc::new(InMemoryOtpStore::new());
    store
        .save(&OtpChallenge::issue("9000000001", Duration::seconds(-5)))
        .await
        .unwrap();
    store
        .save(&OtpChallenge::issue("9000000002", Duration::seconds(300)))
        .await
        .unwrap();

    let sweeper = OtpSweeper::new(store.clone(), std::time::Duration::from_secs(60));
    assert_eq!(sweeper.run_once().await.unwrap(), 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_on_interval() {
    let store = Arc::new(InMemoryOtpStore::new());
    store
        .save(&OtpChallenge::issue("9000000001", Duration::seconds(-5)))
        .await
        .unwrap();

    let sweeper = Arc::new(OtpSweeper::new(store.clone(), std::time::Duration::from_secs(60)));
    let handle = sweeper.start_background_task();

    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    tokio::task::yield_now().await;
    assert!(store.is_empty().await);

    handle.abort();
}
