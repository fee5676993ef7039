//! `UserStore` implementation for `DirectoryStore`.

use std::fs;

use log::debug;

use crate::domain::{AppError, User, ensure_valid_name};
use crate::ports::UserStore;

use super::DirectoryStore;

impl UserStore for DirectoryStore {
    fn register(&self, username: &str) -> Result<User, AppError> {
        let user = User::new(username)?;
        let dir = self.user_dir(username);
        if dir.symlink_metadata().is_ok() {
            return Err(AppError::UserExists(username.to_string()));
        }
        fs::create_dir_all(&dir)?;
        debug!("created user directory {}", dir.display());
        Ok(user)
    }

    fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        ensure_valid_name(username)?;
        self.load_user(username)
    }
}
