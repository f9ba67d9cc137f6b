use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::api::middleware::SessionId;
use crate::api::{blocking, state::AppState};
use crate::crypto::{hash_password, verify_password};
use crate::error::{AppError, AuthError};
use crate::store::{CredentialStore, Session, UserRecord};
use crate::views::auth::{render, AuthPage};

pub const SIGNUP_SUCCESS: &str = "Signup successful! Please login now";

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm: String,
}

/// Check credentials and, on success, move the session to the chat page.
///
/// The session is untouched on any error.
pub fn attempt_login(
    users: &CredentialStore,
    session: &mut Session,
    form: &LoginForm,
) -> Result<(), AppError> {
    let registry = users.load()?;
    let record = registry
        .get(&form.username)
        .ok_or(AuthError::UsernameNotFound)?;

    if !verify_password(&record.password, &form.password, &record.salt) {
        return Err(AuthError::WrongPassword.into());
    }

    session.log_in(&form.username);
    Ok(())
}

/// Validate a signup and persist the new user.
pub fn attempt_signup(users: &CredentialStore, form: &SignupForm) -> Result<(), AppError> {
    let mut registry = users.load()?;

    if registry.contains_key(&form.username) {
        return Err(AuthError::UsernameTaken.into());
    }
    if form.username.is_empty() || form.password.is_empty() || form.confirm.is_empty() {
        return Err(AuthError::MissingFields.into());
    }
    if form.password != form.confirm {
        return Err(AuthError::PasswordMismatch.into());
    }

    let (password, salt) = hash_password(&form.password, None);
    registry.insert(form.username.clone(), UserRecord { password, salt });
    users.save(&registry)
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Extension(SessionId(token)): Extension<SessionId>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let mut session = state.sessions.get(&token).await.unwrap_or_default();
    let users = state.users.clone();
    let username = form.username.clone();

    let outcome = blocking(move || {
        attempt_login(&users, &mut session, &form)?;
        Ok(session)
    })
    .await;

    match outcome {
        Ok(session) => {
            tracing::info!("🔑 {} logged in as {}", session.username, session.anon_tag);
            state.sessions.put(&token, session).await;
            Ok(Redirect::to("/").into_response())
        }
        Err(AppError::Auth(err)) => {
            tracing::warn!("🚫 Login rejected for {:?}: {}", username, err);
            let page = AuthPage::login().with_error(err.to_string()).with_username(username);
            Ok(Html(render(&page)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Html<String>, AppError> {
    let users = state.users.clone();
    let username = form.username.clone();

    match blocking(move || attempt_signup(&users, &form)).await {
        Ok(()) => {
            tracing::info!("✨ New user registered: {}", username);
            Ok(Html(render(&AuthPage::signup().with_success(SIGNUP_SUCCESS))))
        }
        Err(AppError::Auth(err)) => {
            tracing::warn!("🚫 Signup rejected for {:?}: {}", username, err);
            let page = AuthPage::signup().with_error(err.to_string()).with_username(username);
            Ok(Html(render(&page)))
        }
        Err(e) => Err(e),
    }
}
