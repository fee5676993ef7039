pub mod error;
mod file;
mod folder;
pub mod listing;
mod user;
pub mod validation;

pub use error::AppError;
pub use file::File;
pub use folder::Folder;
pub use listing::{ListOrder, Listable, SortKey, SortOrder};
pub use user::User;
pub use validation::{MAX_NAME_LENGTH, NameError, ensure_valid_name, is_valid_name, validate_name};
