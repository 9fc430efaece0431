//! Generic resource handlers, instantiated per collection by the router.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::json;

use crate::common::ApiError;
use crate::domains::resources::collections::ResourceCollection;
use crate::domains::resources::service::{parse_object_id, ResourceService, DEFAULT_LIMIT};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<String>,
}

/// Parse the `limit` query value; absent or non-numeric input falls back to
/// the default page size.
fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

/// POST /<collection> - insert a caller-supplied document verbatim
pub async fn create<C: ResourceCollection>(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<impl IntoResponse, ApiError> {
    let result = ResourceService::open::<C>(&state.db).insert(document).await?;

    let inserted_id = match result.inserted_id.as_object_id() {
        Some(id) => id.to_hex(),
        None => result.inserted_id.to_string(),
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "acknowledged": true,
            "insertedId": inserted_id,
        })),
    ))
}

/// GET /<collection> - every document, unbounded
pub async fn list<C: ResourceCollection>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = ResourceService::open::<C>(&state.db).list_all().await?;
    Ok(Json(documents))
}

/// GET /limited-<collection>?limit=N
pub async fn list_limited<C: ResourceCollection>(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let limit = parse_limit(query.limit.as_deref());
    let documents = ResourceService::open::<C>(&state.db)
        .list_limited(limit)
        .await?;
    Ok(Json(documents))
}

/// GET /<collection>/:id
pub async fn get_by_id<C: ResourceCollection>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_object_id(&id)?;
    let document = ResourceService::open::<C>(&state.db).get_by_id(id).await?;
    Ok(Json(json!({ "result": document })))
}

/// PATCH /<collection>/:id - merge-patch the supplied fields only
pub async fn update_by_id<C: ResourceCollection>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Document>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_object_id(&id)?;
    ResourceService::open::<C>(&state.db)
        .update_by_id(id, patch)
        .await?;
    Ok(Json(json!({ "message": "Data updated successfully" })))
}

/// DELETE /<collection>/:id
///
/// The public contract answers a successful delete with 201.
pub async fn delete_by_id<C: ResourceCollection>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_object_id(&id)?;
    let service = ResourceService::open::<C>(&state.db);
    service.delete_by_id(id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} deleted successfully", service.label()),
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_parses_numeric_values() {
        assert_eq!(parse_limit(Some("2")), 2);
        assert_eq!(parse_limit(Some("15")), 15);
    }

    #[test]
    fn test_limit_defaults_when_absent() {
        assert_eq!(parse_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_defaults_when_non_numeric() {
        assert_eq!(parse_limit(Some("six")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("2.5")), DEFAULT_LIMIT);
    }
}
