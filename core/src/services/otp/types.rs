//! Result types for the OTP service

use serde::Serialize;

use crate::domain::value_objects::PublicUser;

/// Result of issuing a challenge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResult {
    /// Seconds until the code expires
    pub expires_in: i64,
    /// Provider message id
    #[serde(skip_serializing)]
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResult {
    pub phone: String,
    pub verified: bool,
    /// Updated caller record when the request was authenticated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
}
