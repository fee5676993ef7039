//! JSON document adapter for the store ports.
//!
//! The whole virtual filesystem lives in one pretty-printed JSON document that
//! maps usernames to user records. `UserStore` and `FolderStore` are both
//! implemented on `JsonStore`; clones share one lock, so every
//! load-mutate-save cycle on the document is serialized within the process.

mod folder_store;
mod user_store;

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::domain::{AppError, User};

/// Persisted document root: username to user record.
pub(crate) type Users = BTreeMap<String, User>;

/// Store backed by a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonStore {
    /// Create a store for the document at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Arc::new(Mutex::new(())) }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload the document and run a read-only query against it.
    pub(crate) fn read<T>(
        &self,
        query: impl FnOnce(&Users) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let _guard = self.acquire();
        let users = self.load()?;
        query(&users)
    }

    /// Reload the document, apply `mutation`, and save it if the mutation succeeded.
    pub(crate) fn update<T>(
        &self,
        mutation: impl FnOnce(&mut Users) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let _guard = self.acquire();
        let mut users = self.load()?;
        let outcome = mutation(&mut users)?;
        self.save(&users)?;
        Ok(outcome)
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data, so a poisoned lock is still usable.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the document. A missing or blank file is an empty store.
    fn load(&self) -> Result<Users, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no document at {}, starting empty", self.path.display());
                return Ok(Users::new());
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Users::new());
        }
        let users: Users = serde_json::from_str(&content)?;
        debug!("loaded {} user(s) from {}", users.len(), self.path.display());
        Ok(users)
    }

    fn save(&self, users: &Users) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(users)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        file.write_all(data.as_bytes())?;
        file.write_all(b"\n")?;
        debug!("saved {} user(s) to {}", users.len(), self.path.display());
        Ok(())
    }
}

/// Find the stored record for `owner`.
pub(crate) fn stored_user<'a>(users: &'a Users, owner: &User) -> Result<&'a User, AppError> {
    users.get(&owner.username).ok_or_else(|| AppError::UserNotFound(owner.username.clone()))
}

pub(crate) fn stored_user_mut<'a>(
    users: &'a mut Users,
    owner: &User,
) -> Result<&'a mut User, AppError> {
    users.get_mut(&owner.username).ok_or_else(|| AppError::UserNotFound(owner.username.clone()))
}
