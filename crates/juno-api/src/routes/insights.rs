use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use juno_llm::ActivitySuggestion;
use juno_store::Insight;

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;

/// Soft-result shape shared by the insight endpoints: exactly one of the
/// payload field or `error` is set, always with status 200. A missing
/// insight (too few entries, gateway down) is not an HTTP failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Insight<String>> for SummaryResponse {
    fn from(insight: Insight<String>) -> Self {
        match insight {
            Insight::Ready(summary) => Self {
                summary: Some(summary),
                error: None,
            },
            Insight::Unavailable(reason) => Self {
                summary: None,
                error: Some(reason),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionResponse {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<SuggestionResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Insight<Vec<ActivitySuggestion>>> for SuggestionsResponse {
    fn from(insight: Insight<Vec<ActivitySuggestion>>) -> Self {
        match insight {
            Insight::Ready(suggestions) => Self {
                suggestions: Some(
                    suggestions
                        .into_iter()
                        .map(|s| SuggestionResponse {
                            title: s.title,
                            description: s.description,
                        })
                        .collect(),
                ),
                error: None,
            },
            Insight::Unavailable(reason) => Self {
                suggestions: None,
                error: Some(reason),
            },
        }
    }
}

#[utoipa::path(
    get,
    path = "/insights/summary",
    responses(
        (status = 200, description = "Summary or soft error", body = SummaryResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "insights"
)]
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
) -> ApiResult<Json<SummaryResponse>> {
    let insight = state.journal.summary(&user_id).await?;
    Ok(Json(insight.into()))
}

#[utoipa::path(
    get,
    path = "/insights/suggestions",
    responses(
        (status = 200, description = "Activity suggestions or soft error", body = SuggestionsResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "insights"
)]
pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
) -> ApiResult<Json<SuggestionsResponse>> {
    let insight = state.journal.activity_suggestions(&user_id).await?;
    Ok(Json(insight.into()))
}

#[utoipa::path(
    get,
    path = "/insights/weekly",
    responses(
        (status = 200, description = "Weekly recap or soft error", body = SummaryResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "insights"
)]
pub async fn weekly_summary(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
) -> ApiResult<Json<SummaryResponse>> {
    let insight = state.journal.weekly_summary(&user_id).await?;
    Ok(Json(insight.into()))
}
