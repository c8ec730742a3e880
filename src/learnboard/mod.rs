#![allow(clippy::needless_for_each)]

use crate::{
    auth::{
        types::{LoginRequest, UserMetadata},
        AuthConfig, AuthState, PgCredentialStore, SecretHasher,
    },
    learnboard::handlers::{
        health, health::__path_health, user_login::__path_login, user_login::__path_session,
        user_logout::__path_logout,
    },
};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::{get, post},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub(crate) mod handlers;

#[derive(OpenApi)]
#[openapi(
    paths(health, login, session, logout),
    components(schemas(health::Health, LoginRequest, UserMetadata)),
    tags(
        (name = "learnboard", description = "Learnboard session authentication API")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the application router around a ready auth state.
#[must_use]
pub fn router(auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/", get(|| async { "root" }))
        .route("/users/login", post(handlers::login).get(handlers::session))
        .route("/users/logout", post(handlers::logout))
        .route("/health", get(handlers::health).options(handlers::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(auth_state)),
        )
}

/// Start the server
/// # Errors
/// Return error if the database is unreachable, the auth configuration is
/// unusable, or the listener fails
pub async fn new(
    port: u16,
    dsn: String,
    auth_config: AuthConfig,
    hasher: SecretHasher,
) -> Result<()> {
    // Connect to database
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .max_lifetime(Duration::from_secs(60 * 2))
        .test_before_acquire(true)
        .connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    let store = Arc::new(PgCredentialStore::new(pool.clone()));
    let auth_state = Arc::new(
        AuthState::new(&auth_config, store, hasher).context("Invalid auth configuration")?,
    );

    let app = router(auth_state).layer(Extension(pool));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
