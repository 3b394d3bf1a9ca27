mod config;
mod editor;
mod enhance;
mod errors;
mod export;
mod intake;
mod models;
mod persist;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::EnhanceClient;
use crate::intake::parser::{ResumeParser, SampleResumeParser};
use crate::persist::SaveClient;
use crate::routes::build_router;
use crate::session::{InFlight, ResumeSession};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("forge_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Forge API v{}", env!("CARGO_PKG_VERSION"));

    // The single resume session: absent until an upload or create-blank
    let session = Arc::new(ResumeSession::new());

    // File parsing is a stub collaborator for now
    let parser: Arc<dyn ResumeParser> = Arc::new(SampleResumeParser::new());

    // Backend clients (enhancement + save), both with local fallbacks
    let enhancer = EnhanceClient::new(config.backend_base_url.clone());
    let saver = SaveClient::new(config.backend_base_url.clone());
    info!("Backend clients initialized (base: {})", config.backend_base_url);

    let state = AppState {
        session,
        parser,
        enhancer,
        saver,
        enhance_in_flight: Arc::new(InFlight::new("enhance")),
        save_in_flight: Arc::new(InFlight::new("save")),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
