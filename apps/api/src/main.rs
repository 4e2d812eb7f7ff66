use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sourcesmart::config::Config;
use sourcesmart::query::platforms;
use sourcesmart::routes::build_router;
use sourcesmart::state::AppState;
use sourcesmart::{HeuristicExtractor, JdExtractor};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "sourcesmart={level},sourcesmart_api={level},tower_http={level}",
                level = config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SourceSmart API v{}", env!("CARGO_PKG_VERSION"));

    let extractor: Arc<dyn JdExtractor> = Arc::new(HeuristicExtractor);
    info!(
        "JD extractor: {} (max {} chars)",
        extractor.backend(),
        config.max_jd_chars
    );
    info!("Platforms registered: {}", platforms::registry().len());

    let state = AppState {
        config: config.clone(),
        extractor,
    };

    // The browser front-end is served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
