//! Authentication result returned to clients.

use serde::{Deserialize, Serialize};

use super::profiles::PublicUser;

/// A freshly issued bearer token with the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user: PublicUser,
}
