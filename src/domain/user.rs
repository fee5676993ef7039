use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AppError, Folder, ensure_valid_name};

/// A registered user and the folders it owns, keyed by folder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub folders: BTreeMap<String, Folder>,
}

impl User {
    /// Create a user with no folders. Fails if `username` is not a valid name.
    pub fn new(username: &str) -> Result<Self, AppError> {
        ensure_valid_name(username)?;
        Ok(Self { username: username.to_string(), folders: BTreeMap::new() })
    }
}
