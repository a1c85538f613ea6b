//! Login and session handling for the mock server.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// Credentials body accepted by `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// POST /login
///
/// Issues a `fuga-session` cookie on success, mirroring FUGA's
/// cookie-based sessions.
pub async fn login(
    State(state): State<Arc<RwLock<MockState>>>,
    Json(request): Json<LoginRequest>,
) -> Response {
    let mut state = state.write().await;

    let authorized = state
        .accounts
        .get(&request.name)
        .is_some_and(|password| *password == request.password);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": { "code": "UNAUTHENTICATED", "message": "Invalid credentials" }
            })),
        )
            .into_response();
    }

    let token = uuid::Uuid::new_v4().to_string();
    state.sessions.insert(token.clone());

    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("fuga-session={token}; Path=/; HttpOnly"),
        )],
        Json(serde_json::json!({
            "user": { "id": 1, "name": request.name }
        })),
    )
        .into_response()
}

/// Pull the `fuga-session` value out of a Cookie header.
fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("fuga-session="))
        .map(str::to_string)
}

/// Reject requests that don't carry a valid session cookie.
///
/// Returns the 401 response to send when the session is missing or was
/// never issued by `/login`.
pub(crate) fn check_session(headers: &HeaderMap, state: &MockState) -> Result<(), Response> {
    match session_from_headers(headers) {
        Some(token) if state.is_valid_session(&token) => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": { "code": "UNAUTHENTICATED", "message": "A valid session is required" }
            })),
        )
            .into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_headers_parses_cookie_pairs() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "other=1; fuga-session=abc-123; theme=dark".parse().unwrap(),
        );
        assert_eq!(session_from_headers(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_session_from_headers_missing() {
        let headers = HeaderMap::new();
        assert!(session_from_headers(&headers).is_none());
    }
}
