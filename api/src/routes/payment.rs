//! Tutor registration fee

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use tc_core::services::TokenService;
use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::VerifyPaymentRequest;
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

pub fn configure(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/razorpay")
                .wrap(JwtAuth::required(tokens))
                .route("/create-order", web::post().to(create_order))
                .route("/verify", web::post().to(verify_payment)),
        );
    }
}

/// POST /api/razorpay/create-order
pub async fn create_order(state: web::Data<AppState>, auth: AuthContext) -> ApiResult {
    let order = state.payments.create_registration_order(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(order)))
}

/// POST /api/razorpay/verify
pub async fn verify_payment(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<VerifyPaymentRequest>,
) -> ApiResult {
    let user = state
        .payments
        .verify_registration_payment(
            auth.user_id,
            &body.razorpay_order_id,
            &body.razorpay_payment_id,
            &body.razorpay_signature,
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        user,
        "Payment verified successfully",
    )))
}
