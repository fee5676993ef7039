use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppError, ensure_valid_name};

/// A file record. Files carry metadata only, never content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl File {
    pub fn new(name: &str, description: &str) -> Result<Self, AppError> {
        ensure_valid_name(name)?;
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        })
    }
}
