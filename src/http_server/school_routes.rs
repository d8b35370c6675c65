//! School HTTP Routes
//!
//! - `POST /addSchool` - validate and store a school
//! - `GET /listSchools?latitude=&longitude=` - rank by proximity to the given point
//! - `GET /allSchools` - rank by proximity to the given point or the fallback
//! - `GET /` - endpoint documentation

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::observability::{log_event, Event};
use crate::proximity::{rank, RankedSchool};
use crate::school::{Coordinate, SchoolId};
use crate::storage::{SchoolStore, StoreError, StoreResult};
use crate::validation::{parse_reference, reference_or, validate};

// ==================
// Shared State
// ==================

/// State shared by the school handlers
pub struct SchoolState {
    pub store: Arc<dyn SchoolStore>,
    pub fallback: Coordinate,
}

impl SchoolState {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self::with_fallback(store, Coordinate::FALLBACK)
    }

    pub fn with_fallback(store: Arc<dyn SchoolStore>, fallback: Coordinate) -> Self {
        Self { store, fallback }
    }
}

// ==================
// Request/Response Types
// ==================

/// Reference coordinate as it arrives in the query string
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateQuery {
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddSchoolResponse {
    pub message: String,
    #[serde(rename = "schoolId")]
    pub school_id: SchoolId,
}

// ==================
// School Routes
// ==================

/// Create school routes
pub fn school_routes(state: Arc<SchoolState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/addSchool", post(add_school_handler))
        .route("/listSchools", get(list_schools_handler))
        .route("/allSchools", get(all_schools_handler))
        .with_state(state)
}

async fn add_school_handler(
    State(state): State<Arc<SchoolState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AddSchoolResponse>)> {
    let Json(candidate) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let school = validate(&candidate)?;
    let id = with_store(&state, move |store| store.insert(school)).await?;

    let id_str = id.to_string();
    log_event(Event::SchoolAdded, &[("id", id_str.as_str())]);

    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponse {
            message: "School added successfully".to_string(),
            school_id: id,
        }),
    ))
}

async fn list_schools_handler(
    State(state): State<Arc<SchoolState>>,
    query: Result<Query<CoordinateQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<RankedSchool>>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let reference = parse_reference(query.latitude.as_deref(), query.longitude.as_deref())?;

    ranked_response(&state, reference).await
}

async fn all_schools_handler(
    State(state): State<Arc<SchoolState>>,
    query: Result<Query<CoordinateQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<RankedSchool>>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let reference = reference_or(
        query.latitude.as_deref(),
        query.longitude.as_deref(),
        state.fallback,
    )?;

    ranked_response(&state, reference).await
}

/// Runs a store call on the blocking pool; `FileStore` fsyncs on insert.
async fn with_store<T, F>(state: &SchoolState, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn SchoolStore) -> StoreResult<T> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| StoreError::task_failed(format!("store task failed: {}", e)))?;
    Ok(result?)
}

async fn ranked_response(
    state: &SchoolState,
    reference: Coordinate,
) -> ApiResult<Json<Vec<RankedSchool>>> {
    let schools = with_store(state, |store| store.all()).await?;
    let ranked = rank(&schools, reference);

    let reference_str = reference.to_string();
    let count = ranked.len().to_string();
    log_event(
        Event::SchoolsRanked,
        &[("reference", reference_str.as_str()), ("count", count.as_str())],
    );

    Ok(Json(ranked))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>School API</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 0 20px; }
    code { background: #ecf0f1; padding: 2px 6px; border-radius: 4px; }
  </style>
</head>
<body>
  <h1>School API</h1>

  <h2>POST <code>/addSchool</code></h2>
  <p>JSON body, all fields required:</p>
  <ul>
    <li><code>name</code>: 2-100 letters and spaces</li>
    <li><code>address</code>: non-empty, at most 255 characters</li>
    <li><code>latitude</code>: number between -90 and 90</li>
    <li><code>longitude</code>: number between -180 and 180</li>
  </ul>

  <h2>GET <code>/listSchools?latitude=&lt;number&gt;&amp;longitude=&lt;number&gt;</code></h2>
  <p>All schools sorted by distance from the given point.</p>

  <h2>GET <code>/allSchools</code></h2>
  <p>All schools sorted by distance, then name. <code>latitude</code> and
  <code>longitude</code> are optional and default to New Delhi (28.6139, 77.2090).</p>
</body>
</html>
"#;
