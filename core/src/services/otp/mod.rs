//! Phone verification with one-time codes
//!
//! This module provides the OTP challenge workflow:
//! - Code generation and SMS dispatch
//! - Verification with an attempt cap and expiry
//! - Resend, which always replaces the pending challenge
//! - A background sweeper for stores without native expiry

mod config;
mod service;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use sweeper::OtpSweeper;
pub use traits::SmsServiceTrait;
pub use types::{SendOtpResult, VerifyOtpResult};
