use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{User, UserRole};
use crate::errors::{DomainError, MarketplaceError};
use crate::repositories::{InMemoryFavoriteRepository, InMemoryUserRepository, UserRepository};
use crate::services::favorites::FavoritesService;

struct Fixture {
    service: FavoritesService,
    users: Arc<InMemoryUserRepository>,
}

fn setup() -> Fixture {
    let users = Arc::new(InMemoryUserRepository::new());
    let favorites = Arc::new(InMemoryFavoriteRepository::new());
    Fixture {
        service: FavoritesService::new(favorites, users.clone()),
        users,
    }
}

async fn add_user(f: &Fixture, name: &str, role: UserRole) -> User {
    f.users
        .create(User::new_local(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            "hash".to_string(),
            role,
        ))
        .await
        .unwrap()
}

fn marketplace_err(result: Result<impl std::fmt::Debug, DomainError>) -> MarketplaceError {
    match result {
        Err(DomainError::Marketplace(err)) => err,
        other => panic!("expected marketplace error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_toggle_flips_membership() {
    let f = setup();
    let parent = add_user(&f, "Parent", UserRole::Parent).await;
    let tutor = add_user(&f, "Tutor", UserRole::Tutor).await;

    assert!(f.service.toggle_favorite(parent.id, tutor.id).await.unwrap());
    assert!(f.service.is_favorite(parent.id, tutor.id).await.unwrap());

    assert!(!f.service.toggle_favorite(parent.id, tutor.id).await.unwrap());
    assert!(!f.service.is_favorite(parent.id, tutor.id).await.unwrap());
}

#[tokio::test]
async fn test_toggle_checks_roles() {
    let f = setup();
    let parent = add_user(&f, "Parent", UserRole::Parent).await;
    let tutor = add_user(&f, "Tutor", UserRole::Tutor).await;
    let other_parent = add_user(&f, "Other", UserRole::Parent).await;

    assert_eq!(
        marketplace_err(f.service.toggle_favorite(tutor.id, tutor.id).await),
        MarketplaceError::NotAParent
    );
    assert_eq!(
        marketplace_err(f.service.toggle_favorite(parent.id, Uuid::new_v4()).await),
        MarketplaceError::TutorNotFound
    );
    assert_eq!(
        marketplace_err(f.service.toggle_favorite(parent.id, other_parent.id).await),
        MarketplaceError::NotATutor
    );
}

#[tokio::test]
async fn test_add_and_toggle_share_one_relation() {
    let f = setup();
    let parent = add_user(&f, "Parent", UserRole::Parent).await;
    let tutor = add_user(&f, "Tutor", UserRole::Tutor).await;

    f.service.add_favorite(parent.id, tutor.id).await.unwrap();
    assert_eq!(
        marketplace_err(f.service.add_favorite(parent.id, tutor.id).await),
        MarketplaceError::AlreadyFavorited
    );

    // Toggling what add created removes it
    assert!(!f.service.toggle_favorite(parent.id, tutor.id).await.unwrap());
    assert_eq!(
        marketplace_err(f.service.remove_favorite(parent.id, tutor.id).await),
        MarketplaceError::NotInFavorites
    );
}

#[tokio::test]
async fn test_list_favorites_returns_cards() {
    let f = setup();
    let parent = add_user(&f, "Parent", UserRole::Parent).await;
    let first = add_user(&f, "First", UserRole::Tutor).await;
    let second = add_user(&f, "Second", UserRole::Tutor).await;

    f.service.add_favorite(parent.id, first.id).await.unwrap();
    f.service.add_favorite(parent.id, second.id).await.unwrap();

    let cards = f.service.list_favorites(parent.id).await.unwrap();
    let mut ids: Vec<Uuid> = cards.iter().map(|c| c.id).collect();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    f.service.remove_favorite(parent.id, first.id).await.unwrap();
    let cards = f.service.list_favorites(parent.id).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Second");
}

#[tokio::test]
async fn test_favorites_are_per_parent() {
    let f = setup();
    let a = add_user(&f, "Alpha", UserRole::Parent).await;
    let b = add_user(&f, "Beta", UserRole::Parent).await;
    let tutor = add_user(&f, "Tutor", UserRole::Tutor).await;

    f.service.toggle_favorite(a.id, tutor.id).await.unwrap();
    assert!(f.service.list_favorites(b.id).await.unwrap().is_empty());
}
