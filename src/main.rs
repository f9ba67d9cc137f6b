use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anon_chat::{
    api::{create_router, AppState},
    config::Config,
    error::AppError,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,anon_chat=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting Anonymous Chatroom v{}...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded");
    tracing::info!("📁 Users file: {}", config.users_file.display());
    tracing::info!("📁 Chat file:  {}", config.chat_file.display());

    let state = AppState::new(config);

    // Spawn background task for session cleanup
    {
        let sessions = state.sessions.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(3600)); // Every hour
            loop {
                interval.tick().await;
                let removed = sessions.cleanup_expired().await;
                tracing::debug!("🧹 {} expired sessions cleaned up", removed);
            }
        });
        tracing::info!("✅ Session cleanup task started (runs hourly)");
    }

    let addr = state.config.server_address();
    let app = create_router(state);

    tracing::info!("🌐 Server listening on http://{}", addr);
    tracing::info!("🏥 Health check: http://{}/api/health", addr);
    tracing::info!("");
    tracing::info!("📚 Routes:");
    tracing::info!("  GET  /        - Auth or chat page, per session");
    tracing::info!("  POST /login   - Log in");
    tracing::info!("  POST /signup  - Create an account");
    tracing::info!("  POST /chat    - Post an anonymous message");
    tracing::info!("  POST /logout  - Log out");
    tracing::info!("");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
