//! Session cookie transport.
//!
//! Carries the token between client and server and nothing else: no claims are
//! parsed here. Set and clear share one attribute set so a browser always
//! matches the clear against the cookie it holds.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};

pub const SESSION_COOKIE_NAME: &str = "tkn";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

fn build_cookie(value: &str, max_age: i64, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie =
        format!("{SESSION_COOKIE_NAME}={value}; {COOKIE_ATTRIBUTES}; Max-Age={max_age}");
    // Only sent over TLS when the deployment says so.
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Append a `Set-Cookie` carrying `token` to the response headers.
///
/// # Errors
/// Returns an error if the token contains bytes not allowed in a header.
pub fn attach(
    headers: &mut HeaderMap,
    token: &str,
    max_age_seconds: i64,
    secure: bool,
) -> Result<(), InvalidHeaderValue> {
    headers.append(SET_COOKIE, build_cookie(token, max_age_seconds, secure)?);
    Ok(())
}

/// Append a `Set-Cookie` that tells the client to drop the session cookie.
pub fn clear(headers: &mut HeaderMap, secure: bool) {
    // Empty value and fixed attributes always form a valid header.
    if let Ok(cookie) = build_cookie("", 0, secure) {
        headers.append(SET_COOKIE, cookie);
    }
}

/// Read the session token from the request `Cookie` headers.
#[must_use]
pub fn read(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == SESSION_COOKIE_NAME).then(|| val.trim().to_string())
        })
        .next()
}
