use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, User};
use crate::ports::UserStore;

/// In-memory user records shared between the recording stores.
pub type SharedUsers = Arc<Mutex<BTreeMap<String, User>>>;

/// In-memory `UserStore` that records every call by method name.
#[derive(Default)]
pub struct RecordingUserStore {
    users: SharedUsers,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle on the user records, for wiring a `RecordingFolderStore`.
    pub fn state(&self) -> SharedUsers {
        Arc::clone(&self.users)
    }

    /// Number of recorded calls to `method`.
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|m| **m == method).count()
    }

    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }
}

impl UserStore for RecordingUserStore {
    fn register(&self, username: &str) -> Result<User, AppError> {
        self.record("register");
        let mut users = self.users.lock().unwrap();
        if users.contains_key(username) {
            return Err(AppError::UserExists(username.to_string()));
        }
        let user = User::new(username)?;
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }

    fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.record("get_by_username");
        self.users
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))
    }
}
