//! Tutor discovery, profiles and reviews

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use tc_core::services::{TokenService, TutorFilter};
use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{ReviewRequest, UpdateTutorProfileRequest};
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

use super::favorites::parse_tutor_id;
use super::validated;

pub fn configure(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/tutors")
                .route("", web::get().to(list_tutors))
                // Registered before `/{id}` so the literal segment wins
                .service(
                    web::resource("/profile")
                        .wrap(JwtAuth::required(tokens.clone()))
                        .route(web::put().to(update_profile)),
                )
                .route("/{id}", web::get().to(get_tutor))
                .service(
                    web::resource("/{id}/reviews")
                        .wrap(JwtAuth::optional(tokens))
                        .route(web::get().to(list_reviews))
                        .route(web::post().to(add_review)),
                ),
        );
    }
}

/// GET /api/tutors?subject=&class=&maxRate=
pub async fn list_tutors(
    state: web::Data<AppState>,
    filter: web::Query<TutorFilter>,
) -> ApiResult {
    let tutors = state.tutors.list_tutors(&filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(tutors)))
}

/// GET /api/tutors/{id}
pub async fn get_tutor(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let tutor = state.tutors.get_tutor(parse_tutor_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(tutor)))
}

/// PUT /api/tutors/profile
pub async fn update_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<UpdateTutorProfileRequest>,
) -> ApiResult {
    let request = validated(body)?;
    let user = state
        .tutors
        .update_tutor_profile(auth.user_id, request.into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        user,
        "Profile updated",
    )))
}

/// GET /api/tutors/{id}/reviews
pub async fn list_reviews(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let reviews = state.reviews.list_reviews(parse_tutor_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(reviews)))
}

/// POST /api/tutors/{id}/reviews
///
/// A second review by the same reviewer replaces the first.
pub async fn add_review(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<ReviewRequest>,
) -> ApiResult {
    let tutor_id = parse_tutor_id(&path)?;
    let request = validated(body)?;
    let outcome = state
        .reviews
        .add_or_update_review(tutor_id, auth.user_id, request.rating, &request.comment)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        outcome,
        "Review saved",
    )))
}
