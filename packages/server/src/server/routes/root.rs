use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct ServerStatus {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// GET / - status probe
pub async fn status() -> Json<ServerStatus> {
    Json(ServerStatus {
        message: "Server is running smoothly".to_string(),
        timestamp: Utc::now(),
    })
}
