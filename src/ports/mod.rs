mod folder_store;
mod user_store;

pub use folder_store::FolderStore;
pub use user_store::UserStore;
