//! Hint-only homework assistant

use actix_web::{web, HttpResponse};

use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{AssistantReply, ChatRequest, HintRequest};
use crate::handlers::ApiResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ai-assistant")
            .route("/hint", web::post().to(hint))
            .route("/chat", web::post().to(chat)),
    );
}

/// POST /api/ai-assistant/hint
pub async fn hint(state: web::Data<AppState>, body: web::Json<HintRequest>) -> ApiResult {
    let request = body.into_inner();
    let reply = state
        .assistant
        .hint(&request.question, request.subject.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(AssistantReply { reply })))
}

/// POST /api/ai-assistant/chat
pub async fn chat(state: web::Data<AppState>, body: web::Json<ChatRequest>) -> ApiResult {
    let reply = state.assistant.chat(body.into_inner().messages).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(AssistantReply { reply })))
}
