use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppError, File, ensure_valid_name};

/// A named folder inside a user's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub files: BTreeMap<String, File>,
}

impl Folder {
    /// Create an empty folder stamped with the current time.
    pub fn new(name: &str, description: &str) -> Result<Self, AppError> {
        ensure_valid_name(name)?;
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
            files: BTreeMap::new(),
        })
    }
}
