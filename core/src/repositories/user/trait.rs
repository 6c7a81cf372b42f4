//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first and reports every failure as a `DomainError`, so
//! services never see driver-specific errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use tc_core::repositories::UserRepository;
/// use tc_core::domain::entities::User;
/// use tc_core::errors::DomainError;
///
/// struct SqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for SqlUserRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_email(&self, _: &str) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_by_ids(&self, _: &[Uuid]) -> Result<Vec<User>, DomainError> { Ok(vec![]) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn update(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn list_tutors(&self) -> Result<Vec<User>, DomainError> { Ok(vec![]) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email. Callers pass the normalized (lower-cased) form.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Load every user whose id is in `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    ///
    /// # Errors
    /// * `AuthError::UserAlreadyExists` when the email is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace a stored user with `user`
    ///
    /// `rating` and `review_count` are not written; they belong to
    /// `ReviewRepository::upsert_review`. The returned user carries the
    /// stored values.
    ///
    /// # Errors
    /// * `DomainError::NotFound` when no user has `user.id`
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// All users with the tutor role, in no particular order
    async fn list_tutors(&self) -> Result<Vec<User>, DomainError>;
}
