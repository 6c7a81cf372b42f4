//! A parent's saved tutors

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use tc_core::errors::{MarketplaceError, ValidationError};
use tc_core::services::TokenService;
use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{AddFavoriteRequest, FavoriteStatusResponse};
use crate::handlers::{ApiError, ApiResult};
use crate::middleware::{AuthContext, JwtAuth};

pub fn configure(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/favorites")
                .wrap(JwtAuth::required(tokens))
                .route("", web::get().to(list_favorites))
                .route("", web::post().to(add_favorite))
                .route("/toggle/{tutor_id}", web::post().to(toggle_favorite))
                .route("/check/{tutor_id}", web::get().to(check_favorite))
                .route("/{tutor_id}", web::delete().to(remove_favorite)),
        );
    }
}

/// Unknown or malformed ids both read as a missing tutor
pub(crate) fn parse_tutor_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| MarketplaceError::TutorNotFound.into())
}

/// GET /api/favorites
pub async fn list_favorites(state: web::Data<AppState>, auth: AuthContext) -> ApiResult {
    let tutors = state.favorites.list_favorites(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(tutors)))
}

/// POST /api/favorites
pub async fn add_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<AddFavoriteRequest>,
) -> ApiResult {
    if body.tutor_id.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "tutorId".into(),
        }
        .into());
    }
    let tutor_id = parse_tutor_id(&body.tutor_id)?;
    state.favorites.add_favorite(auth.user_id, tutor_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        FavoriteStatusResponse {
            tutor_id: tutor_id.to_string(),
            is_favorite: true,
        },
        "Tutor added to favorites",
    )))
}

/// DELETE /api/favorites/{tutor_id}
pub async fn remove_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult {
    let tutor_id = parse_tutor_id(&path)?;
    state.favorites.remove_favorite(auth.user_id, tutor_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        FavoriteStatusResponse {
            tutor_id: tutor_id.to_string(),
            is_favorite: false,
        },
        "Tutor removed from favorites",
    )))
}

/// POST /api/favorites/toggle/{tutor_id}
pub async fn toggle_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult {
    let tutor_id = parse_tutor_id(&path)?;
    let is_favorite = state.favorites.toggle_favorite(auth.user_id, tutor_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoriteStatusResponse {
        tutor_id: tutor_id.to_string(),
        is_favorite,
    })))
}

/// GET /api/favorites/check/{tutor_id}
pub async fn check_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult {
    let tutor_id = parse_tutor_id(&path)?;
    let is_favorite = state.favorites.is_favorite(auth.user_id, tutor_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoriteStatusResponse {
        tutor_id: tutor_id.to_string(),
        is_favorite,
    })))
}
