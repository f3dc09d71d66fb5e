use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use juno_store::JournalEntry;

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEntryRequest {
    pub mood: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEntryRequest {
    pub mood: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub mood: String,
    pub content: String,
    pub ai_affirmation: Option<String>,
}

impl From<JournalEntry> for EntryResponse {
    fn from(entry: JournalEntry) -> Self {
        Self {
            id: entry.id,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            mood: entry.mood.to_string(),
            content: entry.content,
            ai_affirmation: entry.ai_affirmation,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntriesResponse {
    pub entries: Vec<EntryResponse>,
}

#[utoipa::path(
    post,
    path = "/entries",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = EntryResponse),
        (status = 400, description = "Invalid mood or content"),
        (status = 401, description = "Not authenticated")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
    Json(req): Json<CreateEntryRequest>,
) -> ApiResult<(StatusCode, Json<EntryResponse>)> {
    let entry = state
        .journal
        .add_entry(&user_id, &req.mood, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[utoipa::path(
    get,
    path = "/entries",
    responses(
        (status = 200, description = "All entries, newest first", body = EntriesResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
) -> ApiResult<Json<EntriesResponse>> {
    let entries = state.journal.get_entries(&user_id).await?;
    Ok(Json(EntriesResponse {
        entries: entries.into_iter().map(EntryResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/entries/{id}",
    params(("id" = Uuid, Path, description = "Entry id")),
    responses(
        (status = 200, description = "The entry", body = EntryResponse),
        (status = 404, description = "No such entry for this user")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EntryResponse>> {
    let entry = state.journal.get_entry(&user_id, id).await?;
    Ok(Json(entry.into()))
}

#[utoipa::path(
    put,
    path = "/entries/{id}",
    params(("id" = Uuid, Path, description = "Entry id")),
    request_body = UpdateEntryRequest,
    responses(
        (status = 200, description = "Updated entry", body = EntryResponse),
        (status = 400, description = "Invalid mood or content"),
        (status = 404, description = "No such entry for this user")
    ),
    tag = "entries"
)]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let entry = state
        .journal
        .update_entry(&user_id, id, &req.mood, &req.content)
        .await?;
    Ok(Json(entry.into()))
}

#[utoipa::path(
    delete,
    path = "/entries/{id}",
    params(("id" = Uuid, Path, description = "Entry id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "No such entry for this user")
    ),
    tag = "entries"
)]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.journal.delete_entry(&user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
