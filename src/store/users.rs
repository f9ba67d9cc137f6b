use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::store::json_file;
use crate::store::models::UserMap;

/// Username → credentials mapping persisted as one JSON object.
///
/// Every `save` rewrites the whole file. There is no locking: two writers that
/// load the same snapshot race, and the last `save` wins.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<UserMap, AppError> {
        json_file::read_or_default(&self.path)
    }

    pub fn save(&self, users: &UserMap) -> Result<(), AppError> {
        json_file::write_pretty(&self.path, users)
    }
}
