//! `FolderStore` implementation for `JsonStore`.

use log::debug;

use crate::domain::{AppError, File, Folder, ListOrder, User, ensure_valid_name};
use crate::ports::FolderStore;

use super::{JsonStore, stored_user, stored_user_mut};

fn folder_in<'a>(user: &'a User, name: &str) -> Result<&'a Folder, AppError> {
    user.folders.get(name).ok_or_else(|| AppError::FolderNotFound(name.to_string()))
}

fn folder_in_mut<'a>(user: &'a mut User, name: &str) -> Result<&'a mut Folder, AppError> {
    user.folders.get_mut(name).ok_or_else(|| AppError::FolderNotFound(name.to_string()))
}

impl FolderStore for JsonStore {
    fn get_by_name(&self, owner: &User, name: &str) -> Result<Folder, AppError> {
        self.read(|users| {
            let user = stored_user(users, owner)?;
            folder_in(user, name).cloned()
        })
    }

    fn create(&self, owner: &User, name: &str, description: &str) -> Result<Folder, AppError> {
        self.update(|users| {
            let user = stored_user_mut(users, owner)?;
            let folder = Folder::new(name, description)?;
            if user.folders.contains_key(name) {
                return Err(AppError::FolderExists(name.to_string()));
            }
            user.folders.insert(name.to_string(), folder.clone());
            debug!("created folder {}/{name}", owner.username);
            Ok(folder)
        })
    }

    fn delete(&self, owner: &User, name: &str) -> Result<(), AppError> {
        self.update(|users| {
            let user = stored_user_mut(users, owner)?;
            user.folders
                .remove(name)
                .ok_or_else(|| AppError::FolderNotFound(name.to_string()))?;
            debug!("deleted folder {}/{name}", owner.username);
            Ok(())
        })
    }

    fn rename(&self, owner: &User, name: &str, new_name: &str) -> Result<Folder, AppError> {
        self.update(|users| {
            let user = stored_user_mut(users, owner)?;
            folder_in(user, name)?;
            ensure_valid_name(new_name)?;
            if user.folders.contains_key(new_name) {
                return Err(AppError::FolderExists(new_name.to_string()));
            }

            let mut folder = user
                .folders
                .remove(name)
                .ok_or_else(|| AppError::FolderNotFound(name.to_string()))?;
            folder.name = new_name.to_string();
            user.folders.insert(new_name.to_string(), folder.clone());
            debug!("renamed folder {}/{name} to {new_name}", owner.username);
            Ok(folder)
        })
    }

    fn list(&self, owner: &User, order: ListOrder) -> Result<Vec<Folder>, AppError> {
        self.read(|users| {
            let user = stored_user(users, owner)?;
            let mut folders: Vec<Folder> = user.folders.values().cloned().collect();
            order.sort(&mut folders);
            Ok(folders)
        })
    }

    fn create_file(
        &self,
        owner: &User,
        folder: &Folder,
        name: &str,
        description: &str,
    ) -> Result<File, AppError> {
        self.update(|users| {
            let user = stored_user_mut(users, owner)?;
            let stored = folder_in_mut(user, &folder.name)?;
            let file = File::new(name, description)?;
            if stored.files.contains_key(name) {
                return Err(AppError::FileExists(name.to_string()));
            }
            stored.files.insert(name.to_string(), file.clone());
            debug!("created file {}/{}/{name}", owner.username, folder.name);
            Ok(file)
        })
    }

    fn delete_file(&self, owner: &User, folder: &Folder, name: &str) -> Result<(), AppError> {
        self.update(|users| {
            let user = stored_user_mut(users, owner)?;
            let stored = folder_in_mut(user, &folder.name)?;
            stored.files.remove(name).ok_or_else(|| AppError::FileNotFound(name.to_string()))?;
            debug!("deleted file {}/{}/{name}", owner.username, folder.name);
            Ok(())
        })
    }

    fn list_files(
        &self,
        owner: &User,
        folder: &Folder,
        order: ListOrder,
    ) -> Result<Vec<File>, AppError> {
        self.read(|users| {
            let user = stored_user(users, owner)?;
            let stored = folder_in(user, &folder.name)?;
            let mut files: Vec<File> = stored.files.values().cloned().collect();
            order.sort(&mut files);
            Ok(files)
        })
    }
}
