pub mod handlers;
pub mod types;

use crate::{Result, config::Config, corpus::CorpusLoader, session::ModelSession};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/rewrite", post(handlers::rewrite))
        .route("/rewrite/sample", post(handlers::rewrite_sample))
        .route("/records/:split/:index", get(handlers::record))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Fetch the corpus before touching the engine; a missing corpus should
    // fail fast without pinning any model weights.
    let loader = CorpusLoader::new(&config.corpus);
    let corpus = loader.load(&config.corpus.name).await?;

    // Construct-once session; held for the lifetime of the process.
    let session = ModelSession::connect(&config.engine, config.generation.clone()).await?;

    let state = handlers::AppState {
        corpus: Arc::new(corpus),
        session: Arc::new(Mutex::new(session)),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
