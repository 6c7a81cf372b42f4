//! Favorites service implementation

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::TutorCard;
use crate::errors::{AuthError, DomainResult, MarketplaceError};
use crate::repositories::{FavoriteRepository, UserRepository};

/// Favorite tutors of a parent
///
/// Every operation reads and writes the same relation, so toggling and the
/// explicit add/remove endpoints always agree on membership.
pub struct FavoritesService {
    favorites: Arc<dyn FavoriteRepository>,
    users: Arc<dyn UserRepository>,
}

impl FavoritesService {
    pub fn new(favorites: Arc<dyn FavoriteRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { favorites, users }
    }

    /// Flip membership of `tutor_id` in the parent's favorites
    ///
    /// # Returns
    /// The new membership: `true` when the tutor is now a favorite
    ///
    /// # Errors
    ///
    /// * `MarketplaceError::NotAParent` - Caller is not a parent
    /// * `MarketplaceError::TutorNotFound` - No user with `tutor_id`
    /// * `MarketplaceError::NotATutor` - Target user is not a tutor
    pub async fn toggle_favorite(&self, parent_id: Uuid, tutor_id: Uuid) -> DomainResult<bool> {
        self.ensure_pair(parent_id, tutor_id).await?;
        let is_favorite = self.favorites.toggle(parent_id, tutor_id).await?;
        tracing::info!(
            parent_id = %parent_id,
            tutor_id = %tutor_id,
            is_favorite,
            event = "favorite_toggled",
            "Favorite toggled"
        );
        Ok(is_favorite)
    }

    /// Add `tutor_id` to the parent's favorites
    ///
    /// # Errors
    ///
    /// Same as [`toggle_favorite`](Self::toggle_favorite), plus
    /// `MarketplaceError::AlreadyFavorited` when the tutor is already present.
    pub async fn add_favorite(&self, parent_id: Uuid, tutor_id: Uuid) -> DomainResult<()> {
        self.ensure_pair(parent_id, tutor_id).await?;
        if !self.favorites.add(parent_id, tutor_id).await? {
            return Err(MarketplaceError::AlreadyFavorited.into());
        }
        tracing::info!(parent_id = %parent_id, tutor_id = %tutor_id, event = "favorite_added", "Favorite added");
        Ok(())
    }

    /// Remove `tutor_id` from the parent's favorites
    ///
    /// # Errors
    ///
    /// * `MarketplaceError::NotAParent` - Caller is not a parent
    /// * `MarketplaceError::NotInFavorites` - Tutor was not a favorite
    pub async fn remove_favorite(&self, parent_id: Uuid, tutor_id: Uuid) -> DomainResult<()> {
        self.ensure_parent(parent_id).await?;
        if !self.favorites.remove(parent_id, tutor_id).await? {
            return Err(MarketplaceError::NotInFavorites.into());
        }
        tracing::info!(parent_id = %parent_id, tutor_id = %tutor_id, event = "favorite_removed", "Favorite removed");
        Ok(())
    }

    /// Favorite tutors, most recently added first
    ///
    /// Tutors whose accounts no longer resolve are skipped.
    pub async fn list_favorites(&self, parent_id: Uuid) -> DomainResult<Vec<TutorCard>> {
        self.ensure_parent(parent_id).await?;
        let ids = self.favorites.list_tutor_ids(parent_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let tutors: HashMap<Uuid, User> = self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| tutors.get(id))
            .filter(|u| u.is_tutor())
            .map(TutorCard::from)
            .collect())
    }

    pub async fn is_favorite(&self, parent_id: Uuid, tutor_id: Uuid) -> DomainResult<bool> {
        self.favorites.contains(parent_id, tutor_id).await
    }

    async fn ensure_parent(&self, parent_id: Uuid) -> DomainResult<User> {
        let parent = self
            .users
            .find_by_id(parent_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if !parent.is_parent() {
            return Err(MarketplaceError::NotAParent.into());
        }
        Ok(parent)
    }

    async fn ensure_pair(&self, parent_id: Uuid, tutor_id: Uuid) -> DomainResult<()> {
        self.ensure_parent(parent_id).await?;
        let tutor = self
            .users
            .find_by_id(tutor_id)
            .await?
            .ok_or(MarketplaceError::TutorNotFound)?;
        if !tutor.is_tutor() {
            return Err(MarketplaceError::NotATutor.into());
        }
        Ok(())
    }
}
