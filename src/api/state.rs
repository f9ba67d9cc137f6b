use std::sync::Arc;

use crate::config::Config;
use crate::store::{CredentialStore, MessageStore, SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<CredentialStore>,
    pub messages: Arc<MessageStore>,
    pub sessions: SessionStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            users: Arc::new(CredentialStore::new(config.users_file.clone())),
            messages: Arc::new(MessageStore::new(config.chat_file.clone())),
            sessions: SessionStore::new(config.session_expiry_hours),
            config: Arc::new(config),
        }
    }
}
