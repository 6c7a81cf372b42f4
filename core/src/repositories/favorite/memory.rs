//! In-memory favorites relation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Favorite;
use crate::errors::DomainError;

use super::trait_::FavoriteRepository;

/// Favorites keyed by owner; each list holds distinct tutors in insertion order
#[derive(Clone, Default)]
pub struct InMemoryFavoriteRepository {
    favorites: Arc<RwLock<HashMap<Uuid, Vec<Favorite>>>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn toggle(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        let list = favorites.entry(owner_id).or_default();
        match list.iter().position(|f| f.tutor_id == tutor_id) {
            Some(index) => {
                list.remove(index);
                Ok(false)
            }
            None => {
                list.push(Favorite::new(owner_id, tutor_id));
                Ok(true)
            }
        }
    }

    async fn add(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        let list = favorites.entry(owner_id).or_default();
        if list.iter().any(|f| f.tutor_id == tutor_id) {
            return Ok(false);
        }
        list.push(Favorite::new(owner_id, tutor_id));
        Ok(true)
    }

    async fn remove(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        let Some(list) = favorites.get_mut(&owner_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|f| f.tutor_id != tutor_id);
        Ok(list.len() != before)
    }

    async fn list_tutor_ids(&self, owner_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .get(&owner_id)
            .map(|list| list.iter().rev().map(|f| f.tutor_id).collect())
            .unwrap_or_default())
    }

    async fn contains(&self, owner_id: Uuid, tutor_id: Uuid) -> Result<bool, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .get(&owner_id)
            .is_some_and(|list| list.iter().any(|f| f.tutor_id == tutor_id)))
    }
}
