use log::{debug, info};

use crate::domain::{AppError, File, Folder, ListOrder, User};
use crate::ports::{FolderStore, UserStore};

/// Single entry point over the user and folder stores.
///
/// Every call resolves the user first, and for file operations the folder
/// second, so failures surface in the order: user, folder, operation.
pub struct VirtualFileSystem<U: UserStore, F: FolderStore> {
    users: U,
    folders: F,
}

impl<U: UserStore, F: FolderStore> VirtualFileSystem<U, F> {
    pub fn new(users: U, folders: F) -> Self {
        Self { users, folders }
    }

    /// Get a reference to the user store.
    pub fn users(&self) -> &U {
        &self.users
    }

    /// Get a reference to the folder store.
    pub fn folders(&self) -> &F {
        &self.folders
    }

    pub fn register_user(&self, username: &str) -> Result<User, AppError> {
        let user = self.users.register(username)?;
        info!("registered user {username}");
        Ok(user)
    }

    pub fn create_folder(
        &self,
        username: &str,
        foldername: &str,
        description: &str,
    ) -> Result<Folder, AppError> {
        let owner = self.users.get_by_username(username)?;
        let folder = self.folders.create(&owner, foldername, description)?;
        info!("created folder {username}/{foldername}");
        Ok(folder)
    }

    pub fn delete_folder(&self, username: &str, foldername: &str) -> Result<(), AppError> {
        let owner = self.users.get_by_username(username)?;
        self.folders.delete(&owner, foldername)?;
        info!("deleted folder {username}/{foldername}");
        Ok(())
    }

    pub fn list_folders(&self, username: &str, order: ListOrder) -> Result<Vec<Folder>, AppError> {
        let owner = self.users.get_by_username(username)?;
        debug!("listing folders of {username} by {} {}", order.key.as_str(), order.order.as_str());
        self.folders.list(&owner, order)
    }

    pub fn rename_folder(
        &self,
        username: &str,
        foldername: &str,
        new_foldername: &str,
    ) -> Result<Folder, AppError> {
        let owner = self.users.get_by_username(username)?;
        let folder = self.folders.rename(&owner, foldername, new_foldername)?;
        info!("renamed folder {username}/{foldername} to {new_foldername}");
        Ok(folder)
    }

    pub fn create_file(
        &self,
        username: &str,
        foldername: &str,
        filename: &str,
        description: &str,
    ) -> Result<File, AppError> {
        let (owner, folder) = self.resolve_folder(username, foldername)?;
        let file = self.folders.create_file(&owner, &folder, filename, description)?;
        info!("created file {username}/{foldername}/{filename}");
        Ok(file)
    }

    pub fn delete_file(
        &self,
        username: &str,
        foldername: &str,
        filename: &str,
    ) -> Result<(), AppError> {
        let (owner, folder) = self.resolve_folder(username, foldername)?;
        self.folders.delete_file(&owner, &folder, filename)?;
        info!("deleted file {username}/{foldername}/{filename}");
        Ok(())
    }

    pub fn list_files(
        &self,
        username: &str,
        foldername: &str,
        order: ListOrder,
    ) -> Result<Vec<File>, AppError> {
        let (owner, folder) = self.resolve_folder(username, foldername)?;
        debug!(
            "listing files of {username}/{foldername} by {} {}",
            order.key.as_str(),
            order.order.as_str()
        );
        self.folders.list_files(&owner, &folder, order)
    }

    fn resolve_folder(&self, username: &str, foldername: &str) -> Result<(User, Folder), AppError> {
        let owner = self.users.get_by_username(username)?;
        let folder = self.folders.get_by_name(&owner, foldername)?;
        Ok((owner, folder))
    }
}
