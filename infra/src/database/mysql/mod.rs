//! MySQL repository implementations

mod favorite_repository_impl;
mod message_repository_impl;
mod user_repository_impl;

pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use message_repository_impl::MySqlMessageRepository;
pub use user_repository_impl::MySqlUserRepository;

use tc_core::errors::DomainError;
use uuid::Uuid;

use crate::InfrastructureError;

/// Log a failed statement and convert it into a domain error
pub(crate) fn query_failed(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, context, "Database query failed");
        InfrastructureError::Database(e).into()
    }
}

/// Parse a `CHAR(36)` id column
pub(crate) fn parse_uuid(column: &str, value: &str) -> Result<Uuid, InfrastructureError> {
    Uuid::parse_str(value)
        .map_err(|e| InfrastructureError::Mapping(format!("Invalid UUID in {}: {}", column, e)))
}
