//! Direct messages between parents and tutors

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use tc_core::errors::{ConversationError, ValidationError};
use tc_core::services::TokenService;
use tc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{
    DeletedCountResponse, SendMessageRequest, UnreadCountResponse, UpdatedCountResponse,
};
use crate::handlers::ApiResult;
use crate::middleware::{AuthContext, JwtAuth};

use super::validated;

pub fn configure(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/messages")
                .wrap(JwtAuth::required(tokens))
                .route("", web::post().to(send_message))
                .route("/unread-count", web::get().to(unread_count))
                .route("/conversations", web::get().to(list_conversations))
                .route("/conversations/{id}", web::get().to(get_conversation))
                .route("/conversations/{id}", web::delete().to(clear_conversation))
                .route("/conversations/{id}/read", web::put().to(mark_as_read)),
        );
    }
}

/// POST /api/messages
pub async fn send_message(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<SendMessageRequest>,
) -> ApiResult {
    let request = validated(body)?;
    let recipient = request.recipient_id.trim();
    if recipient.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "recipientId".into(),
        }
        .into());
    }
    let recipient_id =
        Uuid::parse_str(recipient).map_err(|_| ConversationError::RecipientNotFound)?;

    let message = state
        .messaging
        .send_message(auth.user_id, recipient_id, &request.text)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(message)))
}

/// GET /api/messages/conversations
pub async fn list_conversations(state: web::Data<AppState>, auth: AuthContext) -> ApiResult {
    let conversations = state.messaging.list_conversations(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(conversations)))
}

/// GET /api/messages/conversations/{id}
///
/// Viewing a conversation marks the caller's unread messages in it as read.
pub async fn get_conversation(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult {
    let messages = state
        .messaging
        .get_conversation_messages(auth.user_id, &path)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(messages)))
}

/// PUT /api/messages/conversations/{id}/read
pub async fn mark_as_read(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult {
    let updated = state.messaging.mark_as_read(auth.user_id, &path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UpdatedCountResponse { updated })))
}

/// DELETE /api/messages/conversations/{id}
///
/// Removes the conversation for both participants.
pub async fn clear_conversation(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult {
    let deleted = state.messaging.clear_conversation(auth.user_id, &path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        DeletedCountResponse { deleted },
        "Conversation cleared",
    )))
}

/// GET /api/messages/unread-count
pub async fn unread_count(state: web::Data<AppState>, auth: AuthContext) -> ApiResult {
    let unread_count = state.messaging.unread_total(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UnreadCountResponse { unread_count })))
}
