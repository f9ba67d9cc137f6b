use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::store::json_file;
use crate::store::models::ChatMessage;

/// Chronological chat log persisted as one JSON array.
///
/// Same whole-file contract as [`crate::store::CredentialStore`]: load all,
/// mutate, save all, last writer wins.
#[derive(Debug, Clone)]
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<ChatMessage>, AppError> {
        json_file::read_or_default(&self.path)
    }

    pub fn save(&self, messages: &[ChatMessage]) -> Result<(), AppError> {
        json_file::write_pretty(&self.path, messages)
    }
}
