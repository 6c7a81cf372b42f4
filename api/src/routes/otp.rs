//! Phone verification

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use tc_core::services::TokenService;
use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{SendOtpRequest, VerifyOtpRequest};
use crate::handlers::ApiResult;
use crate::middleware::{JwtAuth, OptionalAuth};

pub fn configure(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/otp")
                .route("/send", web::post().to(send_otp))
                .route("/resend", web::post().to(resend_otp))
                .service(
                    web::resource("/verify")
                        .wrap(JwtAuth::optional(tokens))
                        .route(web::post().to(verify_otp)),
                ),
        );
    }
}

/// POST /api/otp/send
pub async fn send_otp(state: web::Data<AppState>, body: web::Json<SendOtpRequest>) -> ApiResult {
    let result = state.otp.issue(body.phone.trim()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        result,
        "OTP sent successfully",
    )))
}

/// POST /api/otp/resend
pub async fn resend_otp(state: web::Data<AppState>, body: web::Json<SendOtpRequest>) -> ApiResult {
    let result = state.otp.resend(body.phone.trim()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        result,
        "OTP resent successfully",
    )))
}

/// POST /api/otp/verify
///
/// With a bearer token the verified phone is saved on the caller's account.
pub async fn verify_otp(
    state: web::Data<AppState>,
    auth: OptionalAuth,
    body: web::Json<VerifyOtpRequest>,
) -> ApiResult {
    let caller = auth.0.map(|ctx| ctx.user_id);
    let result = state
        .otp
        .verify(body.phone.trim(), body.otp.trim(), caller)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        result,
        "Phone number verified successfully",
    )))
}
