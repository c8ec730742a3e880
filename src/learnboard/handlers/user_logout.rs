use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::auth::AuthState;

#[utoipa::path(
    post,
    path= "/users/logout",
    responses (
        (status = 200, description = "Session cookie cleared"),
    ),
    tag= "session"
)]
// clear the session cookie, with or without a session
#[instrument(skip_all)]
pub async fn logout(auth: Extension<Arc<AuthState>>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    auth.sessions().revoke(&mut headers);

    debug!("Session cookie cleared");

    (StatusCode::OK, headers)
}
