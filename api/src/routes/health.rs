use actix_web::{web, HttpResponse};

use crate::app::AppState;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "status": "healthy",
        "service": "tutorconnect-api",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": state.backend,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
