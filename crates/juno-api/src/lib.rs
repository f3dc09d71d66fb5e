pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::session::login,
        routes::session::logout,
        routes::entries::create_entry,
        routes::entries::list_entries,
        routes::entries::get_entry,
        routes::entries::update_entry,
        routes::entries::delete_entry,
        routes::insights::summary,
        routes::insights::suggestions,
        routes::insights::weekly_summary,
        routes::prompts::mood_prompt,
        routes::prompts::writing_prompts,
        routes::chat::chat,
    ),
    components(schemas(
        routes::session::LoginRequest,
        routes::session::LoginResponse,
        routes::entries::CreateEntryRequest,
        routes::entries::UpdateEntryRequest,
        routes::entries::EntryResponse,
        routes::entries::EntriesResponse,
        routes::insights::SummaryResponse,
        routes::insights::SuggestionsResponse,
        routes::insights::SuggestionResponse,
        routes::prompts::MoodPromptRequest,
        routes::prompts::MoodPromptResponse,
        routes::prompts::WritingPromptsRequest,
        routes::prompts::WritingPromptsResponse,
        routes::chat::ChatRequest,
        routes::chat::ChatResponse,
    )),
    tags(
        (name = "entries", description = "Journal entry CRUD"),
        (name = "insights", description = "AI-derived reflections"),
        (name = "prompts", description = "Journaling prompt helpers"),
        (name = "chat", description = "Juno companion chat"),
        (name = "auth", description = "Session management")
    )
)]
pub struct ApiDoc;
