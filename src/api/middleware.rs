use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;

pub const SESSION_COOKIE: &str = "anon_chat_session";

/// Token of the session bound to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

/// Find the session token in the Cookie headers
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            pair.trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .filter(|token| !token.is_empty())
}

/// Session middleware - binds every request to a session context, creating
/// one (and issuing its cookie) on first contact.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = session_token(request.headers()).map(str::to_owned);
    let (token, created) = state.sessions.resolve(presented.as_deref()).await;

    if created {
        tracing::debug!("🆕 New session started");
    }

    request.extensions_mut().insert(SessionId(token.clone()));
    let mut response = next.run(request).await;

    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!("❌ Invalid session cookie: {}", e),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; anon_chat_session=abc-123; lang=en"),
        );
        assert_eq!(session_token(&headers), Some("abc-123"));
    }

    #[test]
    fn ignores_similar_names_and_empty_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("anon_chat_session_old=zzz; anon_chat_session="),
        );
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
