//! `FolderStore` implementation for `DirectoryStore`.

use std::fs;

use log::debug;

use crate::domain::{AppError, File, Folder, ListOrder, User, ensure_valid_name, is_valid_name};
use crate::ports::FolderStore;

use super::{
    DirectoryStore, EntryKind, entry_exists, read_files, read_folder, read_folders,
    write_folder_record, write_json,
};

impl FolderStore for DirectoryStore {
    fn get_by_name(&self, owner: &User, name: &str) -> Result<Folder, AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let dir = self.existing_folder_dir(&user_dir, name)?;
        read_folder(&dir, name)
    }

    fn create(&self, owner: &User, name: &str, description: &str) -> Result<Folder, AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let folder = Folder::new(name, description)?;
        let dir = user_dir.join(name);
        if entry_exists(&dir, EntryKind::Folder)? {
            return Err(AppError::FolderExists(name.to_string()));
        }
        fs::create_dir(&dir)?;
        if let Err(err) = write_folder_record(&dir, &folder) {
            let _ = fs::remove_dir_all(&dir);
            return Err(err);
        }
        debug!("created folder directory {}", dir.display());
        Ok(folder)
    }

    fn delete(&self, owner: &User, name: &str) -> Result<(), AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let dir = self.existing_folder_dir(&user_dir, name)?;
        fs::remove_dir_all(&dir)?;
        debug!("removed folder directory {}", dir.display());
        Ok(())
    }

    fn rename(&self, owner: &User, name: &str, new_name: &str) -> Result<Folder, AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let dir = self.existing_folder_dir(&user_dir, name)?;
        ensure_valid_name(new_name)?;
        let target = user_dir.join(new_name);
        if entry_exists(&target, EntryKind::Folder)? {
            return Err(AppError::FolderExists(new_name.to_string()));
        }

        let mut folder = read_folder(&dir, name)?;
        fs::rename(&dir, &target)?;
        folder.name = new_name.to_string();
        if let Err(err) = write_folder_record(&target, &folder) {
            let _ = fs::rename(&target, &dir);
            return Err(err);
        }
        debug!("moved folder directory {} to {}", dir.display(), target.display());
        Ok(folder)
    }

    fn list(&self, owner: &User, order: ListOrder) -> Result<Vec<Folder>, AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let mut folders = read_folders(&user_dir)?;
        order.sort(&mut folders);
        Ok(folders)
    }

    fn create_file(
        &self,
        owner: &User,
        folder: &Folder,
        name: &str,
        description: &str,
    ) -> Result<File, AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let dir = self.existing_folder_dir(&user_dir, &folder.name)?;
        let file = File::new(name, description)?;
        let path = dir.join(name);
        if entry_exists(&path, EntryKind::File)? {
            return Err(AppError::FileExists(name.to_string()));
        }
        write_json(&path, &file)?;
        Ok(file)
    }

    fn delete_file(&self, owner: &User, folder: &Folder, name: &str) -> Result<(), AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let dir = self.existing_folder_dir(&user_dir, &folder.name)?;
        let path = dir.join(name);
        if !is_valid_name(name) || !entry_exists(&path, EntryKind::File)? {
            return Err(AppError::FileNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        debug!("removed file {}", path.display());
        Ok(())
    }

    fn list_files(
        &self,
        owner: &User,
        folder: &Folder,
        order: ListOrder,
    ) -> Result<Vec<File>, AppError> {
        let user_dir = self.existing_user_dir(&owner.username)?;
        let dir = self.existing_folder_dir(&user_dir, &folder.name)?;
        let mut files = read_files(&dir)?;
        order.sort(&mut files);
        Ok(files)
    }
}
