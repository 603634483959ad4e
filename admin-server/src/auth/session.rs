//! Session cookie
//!
//! The session token travels either in an `Authorization: Bearer` header
//! (API clients) or in an HttpOnly cookie (the browser console). Both are
//! read here; the cookie string is also built here so login and logout
//! agree on its attributes.

use http::HeaderMap;

use super::jwt::JwtService;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "admin_session";

/// Build the Set-Cookie value installing the session
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// Build the Set-Cookie value removing the session
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session token from request headers
///
/// The Authorization header wins over the cookie when both are present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
    {
        return Some(token);
    }

    headers
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(cookie_value)
}

/// Find the session cookie inside a Cookie header value
fn cookie_value(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}
