//! Unit tests for AuthService

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{AuthProvider, UserRole};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, GoogleProfile, RegisterInput};
use crate::services::token::{TokenService, TokenServiceConfig};

fn setup() -> (AuthService, Arc<InMemoryUserRepository>, Arc<TokenService>) {
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let config = AuthServiceConfig {
        bcrypt_cost: 4,
        ..Default::default()
    };
    let service = AuthService::new(users.clone(), tokens.clone(), config);
    (service, users, tokens)
}

fn input(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: "Meera".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: UserRole::Parent,
    }
}

#[tokio::test]
async fn test_register_returns_valid_token() {
    let (service, users, tokens) = setup();

    let session = service.register(input("Meera@Example.com", "secret1")).await.unwrap();

    assert_eq!(session.user.email, "meera@example.com");
    let claims = tokens.verify(&session.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), session.user.id);
    assert_eq!(claims.role, UserRole::Parent);

    let stored = users.find_by_id(session.user.id).await.unwrap().unwrap();
    let hash = stored.password_hash.unwrap();
    assert_ne!(hash, "secret1");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (service, _, _) = setup();
    service.register(input("dup@example.com", "secret1")).await.unwrap();

    let result = service.register(input("DUP@example.com", "another1")).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserAlreadyExists))));
}

#[tokio::test]
async fn test_register_validates_input() {
    let (service, _, _) = setup();

    let result = service.register(input("not-an-email", "secret1")).await;
    assert!(matches!(result, Err(DomainError::ValidationErr(ValidationError::InvalidEmail))));

    let result = service.register(input("ok@example.com", "123")).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::TooShort { .. }))
    ));

    let mut blank = input("ok@example.com", "secret1");
    blank.name = "   ".into();
    assert!(matches!(
        service.register(blank).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_login() {
    let (service, _, _) = setup();
    let registered = service.register(input("login@example.com", "secret1")).await.unwrap();

    let session = service.login("LOGIN@example.com", "secret1").await.unwrap();
    assert_eq!(session.user.id, registered.user.id);

    let wrong = service.login("login@example.com", "wrong-password").await;
    assert!(matches!(wrong, Err(DomainError::Auth(AuthError::InvalidCredentials))));

    let unknown = service.login("nobody@example.com", "secret1").await;
    assert!(matches!(unknown, Err(DomainError::Auth(AuthError::InvalidCredentials))));
}

#[tokio::test]
async fn test_google_login_creates_then_reuses_account() {
    let (service, _, _) = setup();
    let profile = GoogleProfile {
        email: "g@example.com".into(),
        name: "G User".into(),
        picture: Some("https://img.example.com/g.png".into()),
        role: Some(UserRole::Tutor),
    };

    let first = service.google_login(profile.clone()).await.unwrap();
    assert_eq!(first.user.auth_provider, AuthProvider::Google);
    assert_eq!(first.user.role, UserRole::Tutor);

    let second = service.google_login(profile).await.unwrap();
    assert_eq!(first.user.id, second.user.id);

    let password_login = service.login("g@example.com", "whatever").await;
    assert!(matches!(password_login, Err(DomainError::Auth(AuthError::SocialAccount))));
}

#[tokio::test]
async fn test_me() {
    let (service, _, _) = setup();
    let session = service.register(input("me@example.com", "secret1")).await.unwrap();

    let me = service.me(session.user.id).await.unwrap();
    assert_eq!(me.email, "me@example.com");

    let missing = service.me(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(DomainError::Auth(AuthError::UserNotFound))));
}
