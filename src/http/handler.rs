//! HTTP handlers for the document browser

use super::render::render_page;
use super::server::Assets;
use crate::filter::{FilterCriteria, FilterEngine};
use crate::index::DerivedIndexes;
use crate::record::{Record, RecordId, RecordStore};
use crate::session::{BrowserSession, Expansion};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Shared, read-mostly state behind every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub indexes: Arc<DerivedIndexes>,
    pub engine: Arc<Mutex<FilterEngine>>,
}

/// Errors surfaced by the JSON API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Record {0} not found")]
    RecordNotFound(RecordId),

    #[error("Asset {0} not found")]
    AssetNotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Session state carried in the query string
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub q: Option<String>,
    pub person: Option<String>,
    pub classification: Option<String>,
    pub role: Option<String>,
    pub expanded: Option<u64>,
}

impl BrowseParams {
    pub fn into_session(self) -> BrowserSession {
        let mut criteria = FilterCriteria::new();
        if let Some(q) = self.q {
            criteria = criteria.with_search(q);
        }
        if let Some(person) = self.person {
            criteria = criteria.with_person(person);
        }
        if let Some(role) = self.role {
            criteria = criteria.with_role(role);
        }
        if let Some(classification) = self.classification {
            criteria = criteria.with_classification_raw(&classification);
        }
        BrowserSession::from_parts(criteria, Expansion::from(self.expanded.map(RecordId::new)))
    }
}

/// Handler for the browser page
pub async fn page_handler(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Html<String> {
    let session = params.into_session();
    let view = {
        let mut engine = state.engine.lock().await;
        session.view_with(&mut engine, &state.store)
    };
    Html(render_page(&state.indexes, &view))
}

/// Handler for the filtered document list
pub async fn documents_handler(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Response {
    let session = params.into_session();
    let view = {
        let mut engine = state.engine.lock().await;
        session.view_with(&mut engine, &state.store)
    };
    Json(view).into_response()
}

/// Handler for a single record
pub async fn document_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Record>, ApiError> {
    let id = RecordId::new(id);
    state
        .store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::RecordNotFound(id))
}

/// Handler for the selector lists
pub async fn indexes_handler(State(state): State<AppState>) -> Json<DerivedIndexes> {
    Json(DerivedIndexes::clone(&state.indexes))
}

/// Handler for system status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "storage": {
            "records": state.store.len(),
        }
    }))
}

/// Handler for the embedded stylesheet
pub async fn styles_handler() -> Result<Response, ApiError> {
    let css = Assets::get("styles.css").ok_or(ApiError::AssetNotFound("styles.css"))?;
    Ok((
        [(header::CONTENT_TYPE, mime::TEXT_CSS_UTF_8.as_ref())],
        css.data.into_owned(),
    )
        .into_response())
}
