use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::instrument;

use crate::auth::{
    types::{LoginRequest, UserMetadata},
    AuthError, AuthState,
};

#[utoipa::path(
    post,
    path= "/users/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful, session cookie set", body = UserMetadata, content_type = "application/json"),
        (status = 400, description = "Missing or malformed credentials"),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "No such user"),
    ),
    tag= "session"
)]
// authenticate, then issue the session cookie
#[instrument(skip_all)]
pub async fn login(
    auth: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> Result<impl IntoResponse, AuthError> {
    let Some(Json(request)) = payload else {
        return Err(AuthError::BadRequest);
    };

    let principal = auth.authenticator().authenticate(&request).await?;

    let mut headers = HeaderMap::new();
    auth.sessions().issue(&principal, &mut headers)?;

    Ok((
        headers,
        Json(UserMetadata {
            name: principal.name,
        }),
    ))
}

#[utoipa::path(
    get,
    path= "/users/login",
    responses (
        (status = 200, description = "Session is valid", body = UserMetadata, content_type = "application/json"),
        (status = 400, description = "No session cookie presented"),
        (status = 401, description = "Session token invalid or expired"),
    ),
    tag= "session"
)]
// verify the session cookie
#[instrument(skip_all)]
pub async fn session(
    auth: Extension<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<Json<UserMetadata>, AuthError> {
    let principal = auth.sessions().verify(&headers)?;

    Ok(Json(UserMetadata {
        name: principal.name,
    }))
}
