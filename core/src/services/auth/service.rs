//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use tc_shared::validation::{is_valid_email, normalize_email, not_blank};

use crate::domain::entities::{User, UserRole};
use crate::domain::value_objects::{AuthSession, PublicUser};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::types::{GoogleProfile, RegisterInput};

/// Authentication service issuing bearer tokens for parents and tutors
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            tokens,
            config,
        }
    }

    /// Register a local account and sign it in
    ///
    /// # Errors
    ///
    /// * `ValidationError` - Missing name, malformed email or short password
    /// * `AuthError::UserAlreadyExists` - Email already registered
    pub async fn register(&self, input: RegisterInput) -> DomainResult<AuthSession> {
        let name = input.name.trim().to_string();
        if !not_blank(&name) {
            return Err(ValidationError::RequiredField { field: "name".into() }.into());
        }
        let email = normalize_email(&input.email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if input.password.chars().count() < self.config.min_password_length {
            return Err(ValidationError::TooShort {
                field: "password".into(),
                min: self.config.min_password_length,
            }
            .into());
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(input.password).await?;
        let user = self
            .users
            .create(User::new_local(name, email, password_hash, input.role))
            .await?;

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            event = "user_registered",
            "Registered new local account"
        );

        self.session_for(&user)
    }

    /// Sign in with email and password
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(hash) = user.password_hash.clone() else {
            return Err(AuthError::SocialAccount.into());
        };

        if !self.verify_password(password.to_string(), hash).await? {
            tracing::warn!(user_id = %user.id, event = "login_failed", "Wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, event = "login_succeeded", "User signed in");
        self.session_for(&user)
    }

    /// Sign in with a verified Google profile, creating the account on first use
    pub async fn google_login(&self, profile: GoogleProfile) -> DomainResult<AuthSession> {
        let email = normalize_email(&profile.email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let user = match self.users.find_by_email(&email).await? {
            Some(existing) => existing,
            None => {
                let name = if not_blank(&profile.name) {
                    profile.name.trim().to_string()
                } else {
                    email.split('@').next().unwrap_or_default().to_string()
                };
                let user = User::new_google(
                    name,
                    email,
                    profile.picture,
                    profile.role.unwrap_or(UserRole::Parent),
                );
                let created = self.users.create(user).await?;
                tracing::info!(
                    user_id = %created.id,
                    role = %created.role,
                    event = "user_registered",
                    provider = "google",
                    "Created account from Google sign-in"
                );
                created
            }
        };

        self.session_for(&user)
    }

    /// Public record of the caller
    pub async fn me(&self, user_id: Uuid) -> DomainResult<PublicUser> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(PublicUser::from(&user))
    }

    fn session_for(&self, user: &User) -> DomainResult<AuthSession> {
        let token = self.tokens.issue(user.id, user.role)?;
        Ok(AuthSession {
            token,
            expires_in: self.tokens.expiry_seconds(),
            user: PublicUser::from(user),
        })
    }

    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!(error = %e, "bcrypt hashing failed");
                DomainError::from(AuthError::PasswordHashFailed)
            })
    }

    async fn verify_password(&self, password: String, hash: String) -> DomainResult<bool> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("stored password hash is invalid: {}", e)))
    }
}
