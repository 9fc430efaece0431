use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;

use crate::common::ApiError;
use crate::domains::auth::models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::server::app::AppState;

/// POST /api/v1/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .auth
        .register(body.name, body.email, body.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /api/v1/login
///
/// Returns the access token in the body and sets the refresh token as a
/// cookie on the response.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tokens = state.auth.login(body.email, body.password).await?;

    let cookie = format!("refreshToken={}; HttpOnly; Path=/", tokens.refresh);

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            token: tokens.access,
        }),
    ))
}
