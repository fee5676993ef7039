//! `UserStore` implementation for `JsonStore`.

use log::debug;

use crate::domain::{AppError, User, ensure_valid_name};
use crate::ports::UserStore;

use super::JsonStore;

impl UserStore for JsonStore {
    fn register(&self, username: &str) -> Result<User, AppError> {
        self.update(|users| {
            if users.contains_key(username) {
                return Err(AppError::UserExists(username.to_string()));
            }
            let user = User::new(username)?;
            users.insert(username.to_string(), user.clone());
            debug!("registered user {username} in {}", self.path().display());
            Ok(user)
        })
    }

    fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        ensure_valid_name(username)?;
        self.read(|users| {
            users.get(username).cloned().ok_or_else(|| AppError::UserNotFound(username.to_string()))
        })
    }
}
