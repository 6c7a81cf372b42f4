use serde::Deserialize;
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{TutorProfileUpdate, User};
use crate::domain::value_objects::{PublicUser, TutorCard};
use crate::errors::{AuthError, DomainResult, MarketplaceError};
use crate::repositories::UserRepository;

/// Optional listing filters; all set filters must match
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorFilter {
    pub subject: Option<String>,
    pub class: Option<String>,
    pub max_rate: Option<u32>,
}

impl TutorFilter {
    fn matches(&self, user: &User) -> bool {
        let Some(profile) = user.tutor_profile.as_ref() else {
            return false;
        };
        self.subject.as_deref().map_or(true, |s| profile.teaches_subject(s))
            && self.class.as_deref().map_or(true, |c| profile.teaches_class(c))
            && self.max_rate.map_or(true, |max| profile.monthly_rate <= max)
    }
}

pub struct TutorService {
    users: Arc<dyn UserRepository>,
}

impl TutorService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Listed tutors matching `filter`, best rated first, then by name
    ///
    /// Only tutors with a completed profile and a paid registration are listed.
    pub async fn list_tutors(&self, filter: &TutorFilter) -> DomainResult<Vec<TutorCard>> {
        let mut tutors: Vec<User> = self
            .users
            .list_tutors()
            .await?
            .into_iter()
            .filter(|u| u.is_listed_tutor() && filter.matches(u))
            .collect();

        tutors.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(count = tutors.len(), ?filter, "Listed tutors");
        Ok(tutors.iter().map(TutorCard::from).collect())
    }

    /// Public card of a single tutor
    pub async fn get_tutor(&self, tutor_id: Uuid) -> DomainResult<TutorCard> {
        self.users
            .find_by_id(tutor_id)
            .await?
            .filter(User::is_tutor)
            .map(|u| TutorCard::from(&u))
            .ok_or_else(|| MarketplaceError::TutorNotFound.into())
    }

    /// Patch the caller's tutor profile and recompute completion
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - Caller no longer exists
    /// * `AuthError::InsufficientPermissions` - Caller is not a tutor
    pub async fn update_tutor_profile(
        &self,
        user_id: Uuid,
        update: TutorProfileUpdate,
    ) -> DomainResult<PublicUser> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.apply_profile_update(update) {
            return Err(AuthError::InsufficientPermissions.into());
        }
        let user = self.users.update(user).await?;

        tracing::info!(
            user_id = %user.id,
            profile_completed = user.tutor_profile.as_ref().is_some_and(|p| p.profile_completed),
            event = "tutor_profile_updated",
            "Tutor profile updated"
        );
        Ok(PublicUser::from(&user))
    }
}
