mod auth;
mod config;
mod db;
mod errors;
mod interview;
mod llm_client;
mod models;
mod resumes;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::auth::RedisSessionProvider;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::GeminiClient;
use crate::resumes::storage::S3ResumeStorage;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{DocumentStore, InMemoryStore, PgDocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prepwise API v{}", env!("CARGO_PKG_VERSION"));

    // Document store: PostgreSQL when configured, otherwise in-memory
    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgDocumentStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; interviews are kept in memory and lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    // Identity: sessions written to Redis by the sign-in service
    let redis = redis::Client::open(config.redis_url.clone())?;
    let identity = RedisSessionProvider::connect(&redis)
        .await
        .context("Failed to connect to Redis")?;
    info!("Redis session provider initialized");

    // Resume storage: S3 / MinIO
    let s3 = build_s3_client(&config).await;
    let resumes = S3ResumeStorage::new(s3, config.s3_bucket.clone());
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    // LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_timeout)
        .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm_client::MODEL,
        config.gemini_timeout
    );

    let state = AppState {
        store,
        llm: Arc::new(llm),
        identity: Arc::new(identity),
        resumes: Arc::new(resumes),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "prepwise-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
