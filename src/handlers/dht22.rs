use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::debug;

use crate::db::models::Dht22Data;
use crate::error::ApiError;
use crate::handlers::Pagination;
use crate::router::ApiState;

/// POST /dht22 — create a reading, respond 201 with the assigned id.
pub async fn create(
    State(state): State<ApiState>,
    Json(mut record): Json<Dht22Data>,
) -> Result<(StatusCode, Json<Dht22Data>), ApiError> {
    state.dht22.create(&mut record).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /dht22 — list readings for the requested page.
pub async fn list(
    State(state): State<ApiState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Dht22Data>>, ApiError> {
    let rows = state.dht22.read_many(page.page, page.rows_per_page).await?;
    Ok(Json(rows))
}

/// GET /dht22/{id} — 404 with an empty body when the id matches nothing.
pub async fn read_one(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Dht22Data>, ApiError> {
    let record = state.dht22.read_one(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

/// PUT /dht22 — the id travels in the body; answers plain text.
pub async fn update(
    State(state): State<ApiState>,
    Json(record): Json<Dht22Data>,
) -> Result<&'static str, ApiError> {
    let rows = state.dht22.update(&record).await?;
    debug!(id = record.id, rows, "dht22 update");
    Ok("DHT22 data updated successfully")
}

/// DELETE /dht22/{id} — answers plain text.
pub async fn delete(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    let rows = state.dht22.delete(id).await?;
    debug!(id, rows, "dht22 delete");
    Ok("DHT22 data deleted successfully")
}
