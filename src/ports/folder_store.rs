use crate::domain::{AppError, File, Folder, ListOrder, User};

/// Folders and their files, always scoped to an already resolved owner.
///
/// Every method re-checks that `owner` is still on record and reports
/// `UserNotFound` before any folder or file error.
pub trait FolderStore {
    /// Fetch a folder by name.
    fn get_by_name(&self, owner: &User, name: &str) -> Result<Folder, AppError>;

    /// Create an empty folder. Fails with `FolderExists` on a duplicate name.
    fn create(&self, owner: &User, name: &str, description: &str) -> Result<Folder, AppError>;

    /// Delete a folder and every file it holds.
    fn delete(&self, owner: &User, name: &str) -> Result<(), AppError>;

    /// Rename a folder. Nothing changes when `new_name` is already taken.
    fn rename(&self, owner: &User, name: &str, new_name: &str) -> Result<Folder, AppError>;

    /// List the owner's folders in the requested order.
    fn list(&self, owner: &User, order: ListOrder) -> Result<Vec<Folder>, AppError>;

    /// Create a file record inside `folder`.
    fn create_file(
        &self,
        owner: &User,
        folder: &Folder,
        name: &str,
        description: &str,
    ) -> Result<File, AppError>;

    /// Delete a file record from `folder`.
    fn delete_file(&self, owner: &User, folder: &Folder, name: &str) -> Result<(), AppError>;

    /// List the files of `folder` in the requested order.
    fn list_files(
        &self,
        owner: &User,
        folder: &Folder,
        order: ListOrder,
    ) -> Result<Vec<File>, AppError>;
}

impl<T: FolderStore + ?Sized> FolderStore for Box<T> {
    fn get_by_name(&self, owner: &User, name: &str) -> Result<Folder, AppError> {
        (**self).get_by_name(owner, name)
    }

    fn create(&self, owner: &User, name: &str, description: &str) -> Result<Folder, AppError> {
        (**self).create(owner, name, description)
    }

    fn delete(&self, owner: &User, name: &str) -> Result<(), AppError> {
        (**self).delete(owner, name)
    }

    fn rename(&self, owner: &User, name: &str, new_name: &str) -> Result<Folder, AppError> {
        (**self).rename(owner, name, new_name)
    }

    fn list(&self, owner: &User, order: ListOrder) -> Result<Vec<Folder>, AppError> {
        (**self).list(owner, order)
    }

    fn create_file(
        &self,
        owner: &User,
        folder: &Folder,
        name: &str,
        description: &str,
    ) -> Result<File, AppError> {
        (**self).create_file(owner, folder, name, description)
    }

    fn delete_file(&self, owner: &User, folder: &Folder, name: &str) -> Result<(), AppError> {
        (**self).delete_file(owner, folder, name)
    }

    fn list_files(
        &self,
        owner: &User,
        folder: &Folder,
        order: ListOrder,
    ) -> Result<Vec<File>, AppError> {
        (**self).list_files(owner, folder, order)
    }
}
