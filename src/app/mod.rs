pub mod api;
pub mod cli;
pub mod config;
mod vfs;

pub use vfs::VirtualFileSystem;
