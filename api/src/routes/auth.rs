//! Account registration and sign-in

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use tc_core::services::TokenService;
use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{GoogleLoginRequest, LoginRequest, RegisterRequest};
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

use super::validated;

pub fn configure(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/auth")
                .route("/register", web::post().to(register))
                .route("/login", web::post().to(login))
                .route("/google", web::post().to(google_login))
                .service(
                    web::resource("/me")
                        .wrap(JwtAuth::required(tokens))
                        .route(web::get().to(me)),
                ),
        );
    }
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> ApiResult {
    let request = validated(body)?;
    let session = state.auth.register(request.into()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        session,
        "Registration successful",
    )))
}

/// POST /api/auth/login
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> ApiResult {
    let request = validated(body)?;
    let session = state.auth.login(&request.email, &request.password).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(session)))
}

/// POST /api/auth/google
///
/// Accepts the profile claims of an already verified Google account.
pub async fn google_login(
    state: web::Data<AppState>,
    body: web::Json<GoogleLoginRequest>,
) -> ApiResult {
    let request = validated(body)?;
    let session = state.auth.google_login(request.into()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(session)))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>, auth: AuthContext) -> ApiResult {
    let user = state.auth.me(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
