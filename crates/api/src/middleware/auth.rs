//! Basic authentication middleware for protected routes.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::AUTHORIZATION, header::WWW_AUTHENTICATE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use budget_mgt_shared::{AppError, AuthConfig};

/// Challenge sent with every 401 response.
const CHALLENGE: &str = r#"Basic realm="budget-mgt""#;

/// Decodes a `Basic` Authorization header into (username, password).
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header
        .strip_prefix("Basic ")
        .or_else(|| header.strip_prefix("basic "))?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (username, password) = credentials.split_once(':')?;
    Some((username.to_owned(), password.to_owned()))
}

/// Compares two byte strings without short-circuiting on the first difference.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0u8, |diff, (l, r)| diff | (l ^ r))
        == 0
}

fn is_authorized(header: Option<&str>, expected: &AuthConfig) -> bool {
    header
        .and_then(decode_basic)
        .is_some_and(|(username, password)| {
            let username_ok = constant_time_eq(username.as_bytes(), expected.username.as_bytes());
            let password_ok = constant_time_eq(password.as_bytes(), expected.password.as_bytes());
            username_ok & password_ok
        })
}

/// Builds the 401 response carrying the Basic challenge.
fn unauthorized() -> Response {
    let mut response = ApiError(AppError::Unauthorized(
        "Valid Basic credentials are required".to_string(),
    ))
    .into_response();
    response
        .headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
    response
}

/// Authentication middleware that checks Basic credentials against the
/// configured user.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if is_authorized(header, &state.auth) {
        return next.run(request).await;
    }

    debug!(
        method = %request.method(),
        uri = %request.uri(),
        "Rejected request without valid credentials"
    );

    unauthorized()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> AuthConfig {
        AuthConfig {
            username: "user".to_string(),
            password: "pa:ss".to_string(),
        }
    }

    #[test]
    fn test_decode_basic() {
        let header = format!("Basic {}", STANDARD.encode("user:pa:ss"));
        assert_eq!(
            decode_basic(&header),
            Some(("user".to_string(), "pa:ss".to_string()))
        );
    }

    #[test]
    fn test_rejects_other_schemes_and_garbage() {
        assert_eq!(decode_basic("Bearer abc"), None);
        assert_eq!(decode_basic("Basic !!!"), None);
        assert_eq!(decode_basic(&format!("Basic {}", STANDARD.encode("nocolon"))), None);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"secret!"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_unauthorized_response_carries_challenge() {
        let response = unauthorized();

        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], CHALLENGE);
    }

    #[test]
    fn test_wrong_username_is_rejected() {
        let header = format!("Basic {}", STANDARD.encode("other:pa:ss"));
        assert!(!is_authorized(Some(&header), &expected()));
    }

    #[test]
    fn test_is_authorized() {
        let good = format!("Basic {}", STANDARD.encode("user:pa:ss"));
        let bad = format!("Basic {}", STANDARD.encode("user:wrong"));

        assert!(is_authorized(Some(&good), &expected()));
        assert!(!is_authorized(Some(&bad), &expected()));
        assert!(!is_authorized(None, &expected()));
    }
}
