mod catalog;
mod config;
mod errors;
mod ledger;
mod matching;
mod models;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::HttpCatalog;
use crate::config::Config;
use crate::ledger::{DecisionLedger, JsonFileLedgerStore};
use crate::matching::MatchingSession;
use crate::quiz::JsonFileQuizStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("collabforge_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CollabForge API v{}", env!("CARGO_PKG_VERSION"));

    // Local data directory for the quiz-answer and decision-ledger files
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data directory {}", &config.data_dir))?;

    // Project catalog client (external collaborator, read-only)
    let catalog = Arc::new(HttpCatalog::new(config.catalog_base_url.clone()));
    info!("Catalog client initialized ({})", config.catalog_base_url);

    // Quiz answer store, shared between the quiz endpoints and the engine
    let quiz = Arc::new(JsonFileQuizStore::new(format!(
        "{}/quiz_answers.json",
        config.data_dir
    )));

    // Decision ledger, loaded once at startup; best-effort durable from here on
    let ledger = DecisionLedger::open(Arc::new(JsonFileLedgerStore::new(format!(
        "{}/match_decisions.json",
        config.data_dir
    ))));
    info!("Decision ledger loaded ({} decisions)", ledger.all().len());

    // Matching session facade
    let session = Arc::new(MatchingSession::new(catalog, quiz.clone(), ledger));

    let state = AppState {
        session,
        quiz,
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
