//! Route handlers grouped by resource
//!
//! Each module exposes a `configure` function mounting its resources under
//! the `/api` scope, with bearer authentication applied per resource.

pub mod ai;
pub mod auth;
pub mod favorites;
pub mod health;
pub mod messages;
pub mod otp;
pub mod payment;
pub mod tutors;

use actix_web::web;
use validator::Validate;

use crate::handlers::{ApiError, ApiResult};

/// Unwraps a JSON body and runs its field validators
pub(crate) fn validated<T: Validate>(body: web::Json<T>) -> ApiResult<T> {
    let body = body.into_inner();
    body.validate().map_err(ApiError::from)?;
    Ok(body)
}
