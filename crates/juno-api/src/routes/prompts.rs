use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoodPromptRequest {
    pub mood: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoodPromptResponse {
    pub prompt: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WritingPromptsRequest {
    pub entry_so_far: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WritingPromptsResponse {
    pub prompts: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/prompts/mood",
    request_body = MoodPromptRequest,
    responses(
        (status = 200, description = "A prompt tailored to the mood", body = MoodPromptResponse),
        (status = 400, description = "Unknown mood label")
    ),
    tag = "prompts"
)]
pub async fn mood_prompt(
    State(state): State<Arc<AppState>>,
    Identity(_user_id): Identity,
    Json(req): Json<MoodPromptRequest>,
) -> ApiResult<Json<MoodPromptResponse>> {
    let prompt = state.journal.mood_prompt(&req.mood).await?;
    Ok(Json(MoodPromptResponse { prompt }))
}

#[utoipa::path(
    post,
    path = "/prompts/writing",
    request_body = WritingPromptsRequest,
    responses(
        (status = 200, description = "Follow-up questions for the draft", body = WritingPromptsResponse)
    ),
    tag = "prompts"
)]
pub async fn writing_prompts(
    State(state): State<Arc<AppState>>,
    Identity(_user_id): Identity,
    Json(req): Json<WritingPromptsRequest>,
) -> ApiResult<Json<WritingPromptsResponse>> {
    let prompts = state.journal.writing_prompts(&req.entry_so_far).await?;
    Ok(Json(WritingPromptsResponse { prompts }))
}
