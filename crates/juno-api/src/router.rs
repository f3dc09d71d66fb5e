use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::config::Config;
use crate::middleware::logging;
use crate::routes::{chat, entries, health, insights, prompts, session};
use crate::state::AppState;
use crate::ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Sessions
        .route("/auth/login", post(session::login))
        .route("/auth/logout", post(session::logout))
        // Entries
        .route("/entries", post(entries::create_entry))
        .route("/entries", get(entries::list_entries))
        .route("/entries/:id", get(entries::get_entry))
        .route("/entries/:id", put(entries::update_entry))
        .route("/entries/:id", delete(entries::delete_entry))
        // Insights
        .route("/insights/summary", get(insights::summary))
        .route("/insights/suggestions", get(insights::suggestions))
        .route("/insights/weekly", get(insights::weekly_summary))
        // Prompts & chat
        .route("/prompts/mood", post(prompts::mood_prompt))
        .route("/prompts/writing", post(prompts::writing_prompts))
        .route("/chat", post(chat::chat))
        // OpenAPI
        .route("/api/docs", get(openapi));

    Router::new()
        .merge(api_routes)
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let mut cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors = cors.allow_origin(Any);
        } else {
            for origin in &config.cors.origins {
                if let Ok(parsed_origin) = origin.parse::<axum::http::HeaderValue>() {
                    cors = cors.allow_origin(parsed_origin);
                }
            }
        }

        cors
    } else {
        CorsLayer::permissive()
    }
}
