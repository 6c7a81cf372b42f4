//! Unit tests for the in-memory favorites relation

use uuid::Uuid;

use crate::repositories::favorite::{FavoriteRepository, InMemoryFavoriteRepository};

#[tokio::test]
async fn test_toggle_flips_membership() {
    let repo = InMemoryFavoriteRepository::new();
    let (parent, tutor) = (Uuid::new_v4(), Uuid::new_v4());

    assert!(repo.toggle(parent, tutor).await.unwrap());
    assert!(repo.contains(parent, tutor).await.unwrap());
    assert!(!repo.toggle(parent, tutor).await.unwrap());
    assert!(!repo.contains(parent, tutor).await.unwrap());
}

#[tokio::test]
async fn test_add_and_remove_report_changes() {
    let repo = InMemoryFavoriteRepository::new();
    let (parent, tutor) = (Uuid::new_v4(), Uuid::new_v4());

    assert!(repo.add(parent, tutor).await.unwrap());
    assert!(!repo.add(parent, tutor).await.unwrap());
    assert!(repo.remove(parent, tutor).await.unwrap());
    assert!(!repo.remove(parent, tutor).await.unwrap());
    assert!(!repo.remove(Uuid::new_v4(), tutor).await.unwrap());
}

#[tokio::test]
async fn test_list_is_newest_first_and_per_owner() {
    let repo = InMemoryFavoriteRepository::new();
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
    let (t1, t2) = (Uuid::new_v4(), Uuid::new_v4());

    repo.add(p1, t1).await.unwrap();
    repo.toggle(p1, t2).await.unwrap();
    repo.add(p2, t1).await.unwrap();

    assert_eq!(repo.list_tutor_ids(p1).await.unwrap(), vec![t2, t1]);
    assert_eq!(repo.list_tutor_ids(p2).await.unwrap(), vec![t1]);
    assert!(repo.list_tutor_ids(Uuid::new_v4()).await.unwrap().is_empty());
}
