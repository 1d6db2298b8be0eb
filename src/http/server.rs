//! HTTP server implementation for the document browser

use super::handler::{
    document_handler, documents_handler, indexes_handler, page_handler, status_handler,
    styles_handler, AppState,
};
use crate::config::ServerConfig;
use crate::filter::FilterEngine;
use crate::index::IndexManager;
use crate::record::RecordStore;
use axum::{routing::get, Router};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
pub(crate) struct Assets;

/// HTTP server serving the browser page, its assets and the JSON API
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server over `store`
    pub fn new(config: ServerConfig, store: Arc<RecordStore>) -> Self {
        let indexes = IndexManager::new().indexes(&store);
        let engine = FilterEngine::with_capacity(config.filter_cache_capacity);
        let state = AppState {
            store,
            indexes,
            engine: Arc::new(Mutex::new(engine)),
        };
        Self { config, state }
    }

    /// Build the router without binding a socket
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(page_handler))
            .route("/assets/styles.css", get(styles_handler))
            .route("/api/documents", get(documents_handler))
            .route("/api/documents/:id", get(document_handler))
            .route("/api/indexes", get(indexes_handler))
            .route("/api/status", get(status_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            "Serving {} records at http://{}",
            self.state.store.len(),
            addr
        );

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
