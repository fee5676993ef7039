use crate::domain::{AppError, User};

/// Registry of users.
pub trait UserStore {
    /// Register a new user with no folders.
    ///
    /// Fails with `UserExists` if the username is taken, or `InvalidName` if it
    /// does not pass validation.
    fn register(&self, username: &str) -> Result<User, AppError>;

    /// Look up a registered user.
    fn get_by_username(&self, username: &str) -> Result<User, AppError>;
}

impl<T: UserStore + ?Sized> UserStore for Box<T> {
    fn register(&self, username: &str) -> Result<User, AppError> {
        (**self).register(username)
    }

    fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        (**self).get_by_username(username)
    }
}
