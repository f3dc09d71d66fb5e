use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Companion reply", body = ChatResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let response = state.journal.chat(&user_id, &req.message).await?;
    Ok(Json(ChatResponse { response }))
}
