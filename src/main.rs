use axum::Router;
use axum::extract::Extension;
use axum::routing::{delete, get, post, put};
use reviewd::api::handlers::{
    handle_add_review, handle_delete_review, handle_generate_review, handle_get_reviews,
    handle_health, handle_root, handle_update_review,
};
use reviewd::config::Config;
use reviewd::generation::client::{OpenAiGenerator, TextGenerator};
use reviewd::generation::secrets::{HttpSecretResolver, SecretResolver};
use reviewd::store::adapter::ReviewStore;
use reviewd::store::backend::MemoryBackend;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;

    // 1. Storage layer:
    let store = Arc::new(ReviewStore::new(Arc::new(MemoryBackend::new())));

    // 2. Generation layer:
    let resolver: Arc<dyn SecretResolver> = Arc::new(HttpSecretResolver::new(
        &config.secret_store_url,
        &config.secret_id,
    ));
    let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiGenerator::new(
        resolver,
        &config.generation_url,
        &config.generation_model,
    ));

    // 3. HTTP router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/get-reviews", get(handle_get_reviews))
        .route("/add-review", post(handle_add_review))
        .route("/update-review", put(handle_update_review))
        .route("/delete-review", delete(handle_delete_review))
        .route("/generate-review", get(handle_generate_review))
        .layer(Extension(store))
        .layer(Extension(generator));

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
