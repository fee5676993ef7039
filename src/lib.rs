//! vfsctl: a virtual filesystem of users, folders and files, persisted as a
//! single JSON document or mirrored onto a directory tree.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::VirtualFileSystem;
pub use app::api::{DynVirtualFileSystem, open, open_backend};
pub use app::config::{Backend, Config};
pub use domain::{AppError, File, Folder, ListOrder, SortKey, SortOrder, User};
