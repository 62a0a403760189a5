//! API Token Authentication
//!
//! Resolves the "Authorization: Token <key>" header against the token
//! repository and hands the matching actor to handlers via request
//! extensions. "Bearer" is accepted as an alias for clients that only
//! speak that scheme.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Extract the key from an Authorization header value
fn parse_token(header: &str) -> Option<&str> {
    let key = header
        .strip_prefix("Token ")
        .or_else(|| header.strip_prefix("Bearer "))?;
    let key = key.trim();

    (!key.is_empty()).then_some(key)
}

/// Authentication middleware
/// Maps the presented API token onto a platform actor
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let key = match auth_header.and_then(parse_token) {
        Some(key) => key,
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    let lookup = state.tokens.find_actor(key).await;

    match lookup {
        Ok(Some(actor)) => {
            request.extensions_mut().insert(actor);
            Ok(next.run(request).await)
        }
        Ok(None) => {
            tracing::warn!("Unknown API token attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        Err(e) => {
            tracing::warn!("Token lookup failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_accepts_both_schemes() {
        assert_eq!(parse_token("Token abc123"), Some("abc123"));
        assert_eq!(parse_token("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_parse_token_rejects_malformed_headers() {
        assert_eq!(parse_token("abc123"), None);
        assert_eq!(parse_token("Token "), None);
        assert_eq!(parse_token("Basic abc123"), None);
        assert_eq!(parse_token(""), None);
    }
}
