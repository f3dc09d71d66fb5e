use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use juno_api::{
    auth::{SessionStore, UserDirectory},
    config::Config,
    router::build_router,
    state::AppState,
};
use juno_llm::{GenerateClient, OpenAIClient};
use juno_store::{EntryRepository, JournalService, MemoryRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Juno API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Initialize LLM client
    let llm_client: Arc<dyn GenerateClient> =
        Arc::new(OpenAIClient::new(config.openai_api_key.clone())?);

    // Initialize entry storage
    let repository = build_repository(&config).await?;
    tracing::info!("Storage backend ready: {}", config.storage.backend);

    // Wire up the journaling service
    let journal = JournalService::builder()
        .repository(repository)
        .llm_client(llm_client)
        .model(config.llm.model.clone())
        .build()?;

    // Create application state
    let sessions = SessionStore::new();
    let users = UserDirectory::from_config(&config.auth);
    let state = Arc::new(AppState::new(config.clone(), journal, sessions, users));

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("OpenAPI spec: http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn EntryRepository>> {
    match config.storage.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryRepository::new())),
        #[cfg(feature = "mongodb")]
        "mongodb" => {
            let repo = juno_store::MongoRepository::connect(
                &config.mongodb_uri,
                &config.storage.database,
            )
            .await?;
            Ok(Arc::new(repo))
        }
        other => anyhow::bail!("Unsupported storage backend: {}", other),
    }
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
