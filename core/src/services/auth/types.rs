//! Input types for the authentication service

use crate::domain::entities::UserRole;

/// Local account registration
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Profile claims of a verified Google account.
///
/// The OAuth code exchange happens before this reaches the service.
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    /// Role chosen on first sign-in; parents by default
    pub role: Option<UserRole>,
}
