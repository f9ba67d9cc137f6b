pub mod auth;
pub mod chat;
pub mod middleware;
pub mod state;

pub use middleware::{SessionId, SESSION_COOKIE};
pub use state::AppState;

use axum::{
    extract::{Query, State},
    middleware as axum_middleware,
    response::Html,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::store::Page;
use crate::views::{self, auth::AuthPage, auth::Tab};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub tab: Tab,
}

pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Session contexts only exist for the browser-facing pages
    let pages = Router::new()
        // Page dispatch
        .route("/", get(index))

        // Auth forms
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))

        // Chat forms
        .route("/chat", post(chat::send_message))
        .route("/logout", post(chat::logout))

        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session_middleware,
        ));

    Router::new()
        .merge(pages)
        // Health check
        .route("/api/health", get(health))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - render whichever view the session is on
pub async fn index(
    State(state): State<AppState>,
    Extension(SessionId(token)): Extension<SessionId>,
    query: Option<Query<IndexQuery>>,
) -> Result<Html<String>, AppError> {
    // Unknown tab names fall back to the login tab
    let tab = query.map(|Query(query)| query.tab).unwrap_or_default();
    let session = state.sessions.get(&token).await.unwrap_or_default();

    match session.page {
        Page::Auth => Ok(Html(views::auth::render(&AuthPage::new(tab)))),
        Page::Chat => {
            let store = state.messages.clone();
            let messages = blocking(move || store.load()).await?;
            Ok(Html(views::chat::render(&session, &messages)))
        }
    }
}

/// Run a whole-file store operation on the blocking pool.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Blocking task failed: {}", e)))?
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
