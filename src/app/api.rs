//! API facade wiring.
//!
//! Builds the stores for a resolved output path and hands back a ready
//! `VirtualFileSystem`. This is the only place that knows which concrete
//! adapters exist.

use log::debug;

use crate::adapters::{DirectoryStore, JsonStore};
use crate::app::VirtualFileSystem;
use crate::app::config::{Backend, Config};
use crate::domain::AppError;
use crate::ports::{FolderStore, UserStore};

/// Facade over runtime-selected stores.
pub type DynVirtualFileSystem = VirtualFileSystem<Box<dyn UserStore>, Box<dyn FolderStore>>;

/// Build the facade for the backend implied by `config`.
pub fn open(config: &Config) -> Result<DynVirtualFileSystem, AppError> {
    let backend = config.backend()?;
    Ok(open_backend(&backend))
}

/// Build the facade for an explicit backend.
pub fn open_backend(backend: &Backend) -> DynVirtualFileSystem {
    match backend {
        Backend::Json(path) => {
            debug!("using JSON document {}", path.display());
            let store = JsonStore::new(path);
            VirtualFileSystem::new(Box::new(store.clone()), Box::new(store))
        }
        Backend::Directory(root) => {
            debug!("using directory tree {}", root.display());
            let store = DirectoryStore::new(root);
            VirtualFileSystem::new(Box::new(store.clone()), Box::new(store))
        }
    }
}
