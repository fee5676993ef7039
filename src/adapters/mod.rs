pub mod directory;
pub mod json;

pub use directory::DirectoryStore;
pub use json::JsonStore;
