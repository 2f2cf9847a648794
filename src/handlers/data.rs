use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::debug;

use crate::db::models::Data;
use crate::error::ApiError;
use crate::handlers::Pagination;
use crate::router::ApiState;

/// POST /data — create a record, respond 201 with the assigned id.
pub async fn create(
    State(state): State<ApiState>,
    Json(mut record): Json<Data>,
) -> Result<(StatusCode, Json<Data>), ApiError> {
    state.data.create(&mut record).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /data — list records for the requested page.
pub async fn list(
    State(state): State<ApiState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Data>>, ApiError> {
    let rows = state.data.read_many(page.page, page.rows_per_page).await?;
    Ok(Json(rows))
}

/// GET /data/{id} — 404 with an empty body when the id matches nothing.
pub async fn read_one(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Data>, ApiError> {
    let record = state.data.read_one(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

/// PUT /data — the id travels in the body; answers plain text.
pub async fn update(
    State(state): State<ApiState>,
    Json(record): Json<Data>,
) -> Result<&'static str, ApiError> {
    let rows = state.data.update(&record).await?;
    debug!(id = record.id, rows, "data update");
    Ok("Data updated successfully")
}

/// DELETE /data/{id} — answers plain text.
pub async fn delete(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    let rows = state.data.delete(id).await?;
    debug!(id, rows, "data delete");
    Ok("Data deleted successfully")
}
