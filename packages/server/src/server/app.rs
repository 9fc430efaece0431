//! Application setup and server configuration.

use anyhow::{Context, Result};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use mongodb::Database;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::{AuthService, JwtService};
use crate::domains::resources::{
    CommunityPosts, DashboardData, Donations, Supplies, Testimonials, Volunteers,
};
use crate::server::routes::{auth, resources, root};
use crate::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
}

/// Build the Axum application router.
///
/// Returns (Router, AuthService) - the auth service is also needed at
/// startup for index bootstrap.
pub fn build_app(db: Database, config: &Config) -> Result<(Router, AuthService)> {
    let jwt = JwtService::new(
        &config.jwt_secret,
        config.access_token_ttl_secs,
        config.refresh_token_ttl_secs,
    );
    let auth_service = AuthService::new(&db, jwt);

    // CORS for the configured front-end origin, with credentials so the
    // refresh-token cookie survives cross-origin calls
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("CORS_ORIGIN is not a valid header value")?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let state = AppState {
        db,
        auth: auth_service.clone(),
    };

    // Which operations each collection exposes is decided here; the
    // resource service itself supports the full set uniformly.
    let api = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/supplies",
            post(resources::create::<Supplies>).get(resources::list::<Supplies>),
        )
        .route("/limited-supplies", get(resources::list_limited::<Supplies>))
        .route(
            "/supplies/:id",
            get(resources::get_by_id::<Supplies>)
                .patch(resources::update_by_id::<Supplies>)
                .delete(resources::delete_by_id::<Supplies>),
        )
        .route(
            "/data",
            post(resources::create::<DashboardData>).get(resources::list::<DashboardData>),
        )
        .route(
            "/data/:id",
            get(resources::get_by_id::<DashboardData>)
                .patch(resources::update_by_id::<DashboardData>)
                .delete(resources::delete_by_id::<DashboardData>),
        )
        .route("/donate", post(resources::create::<Donations>))
        .route(
            "/community",
            post(resources::create::<CommunityPosts>).get(resources::list::<CommunityPosts>),
        )
        .route(
            "/testimonial",
            post(resources::create::<Testimonials>).get(resources::list::<Testimonials>),
        )
        .route(
            "/volunteer",
            post(resources::create::<Volunteers>).get(resources::list::<Volunteers>),
        );

    let app = Router::new()
        .route("/", get(root::status))
        .nest("/api/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok((app, auth_service))
}
