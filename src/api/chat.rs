use axum::{
    extract::State,
    response::Redirect,
    Extension, Form,
};
use serde::Deserialize;

use crate::api::middleware::SessionId;
use crate::api::{blocking, state::AppState};
use crate::error::AppError;
use crate::store::{ChatMessage, MessageStore, Page, Session};

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageForm {
    #[serde(default)]
    pub text: String,
}

/// Append one message under the session's anon tag.
///
/// Returns `false` without touching the store when there is nothing to post
/// or the session is not on the chat page.
pub fn post_message(store: &MessageStore, session: &Session, text: &str) -> Result<bool, AppError> {
    if text.is_empty() || !session.logged_in || session.page != Page::Chat {
        return Ok(false);
    }

    let mut messages = store.load()?;
    messages.push(ChatMessage {
        user: session.anon_tag.clone(),
        text: text.to_string(),
    });
    store.save(&messages)?;
    Ok(true)
}

/// POST /chat
pub async fn send_message(
    State(state): State<AppState>,
    Extension(SessionId(token)): Extension<SessionId>,
    Form(form): Form<SendMessageForm>,
) -> Result<Redirect, AppError> {
    let session = state.sessions.get(&token).await.unwrap_or_default();
    let store = state.messages.clone();
    let author = session.anon_tag.clone();

    let posted = blocking(move || post_message(&store, &session, &form.text)).await?;
    if posted {
        tracing::info!("💬 {} posted a message", author);
    } else {
        tracing::debug!("Ignored empty or unauthenticated post");
    }

    Ok(Redirect::to("/"))
}

/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(SessionId(token)): Extension<SessionId>,
) -> Redirect {
    let mut session = state.sessions.get(&token).await.unwrap_or_default();
    if session.logged_in {
        tracing::info!("🚪 {} logged out", session.username);
    }
    session.log_out();
    state.sessions.put(&token, session).await;

    Redirect::to("/")
}
