use std::sync::Mutex;

use crate::domain::{AppError, File, Folder, ListOrder, User};
use crate::ports::FolderStore;

use super::SharedUsers;

/// In-memory `FolderStore` over the records of a `RecordingUserStore`.
pub struct RecordingFolderStore {
    users: SharedUsers,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingFolderStore {
    pub fn new(users: SharedUsers) -> Self {
        Self { users, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|m| **m == method).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }

    fn with_owner<T>(
        &self,
        owner: &User,
        f: impl FnOnce(&mut User) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&owner.username)
            .ok_or_else(|| AppError::UserNotFound(owner.username.clone()))?;
        f(user)
    }
}

fn folder_mut<'a>(user: &'a mut User, name: &str) -> Result<&'a mut Folder, AppError> {
    user.folders.get_mut(name).ok_or_else(|| AppError::FolderNotFound(name.to_string()))
}

impl FolderStore for RecordingFolderStore {
    fn get_by_name(&self, owner: &User, name: &str) -> Result<Folder, AppError> {
        self.record("get_by_name");
        self.with_owner(owner, |user| folder_mut(user, name).map(|f| f.clone()))
    }

    fn create(&self, owner: &User, name: &str, description: &str) -> Result<Folder, AppError> {
        self.record("create");
        self.with_owner(owner, |user| {
            let folder = Folder::new(name, description)?;
            if user.folders.contains_key(name) {
                return Err(AppError::FolderExists(name.to_string()));
            }
            user.folders.insert(name.to_string(), folder.clone());
            Ok(folder)
        })
    }

    fn delete(&self, owner: &User, name: &str) -> Result<(), AppError> {
        self.record("delete");
        self.with_owner(owner, |user| {
            user.folders
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| AppError::FolderNotFound(name.to_string()))
        })
    }

    fn rename(&self, owner: &User, name: &str, new_name: &str) -> Result<Folder, AppError> {
        self.record("rename");
        self.with_owner(owner, |user| {
            folder_mut(user, name)?;
            if user.folders.contains_key(new_name) {
                return Err(AppError::FolderExists(new_name.to_string()));
            }
            let mut folder = user.folders.remove(name).expect("checked above");
            folder.name = new_name.to_string();
            user.folders.insert(new_name.to_string(), folder.clone());
            Ok(folder)
        })
    }

    fn list(&self, owner: &User, order: ListOrder) -> Result<Vec<Folder>, AppError> {
        self.record("list");
        self.with_owner(owner, |user| {
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
        self.record("create_file");
        self.with_owner(owner, |user| {
            let stored = folder_mut(user, &folder.name)?;
            let file = File::new(name, description)?;
            if stored.files.contains_key(name) {
                return Err(AppError::FileExists(name.to_string()));
            }
            stored.files.insert(name.to_string(), file.clone());
            Ok(file)
        })
    }

    fn delete_file(&self, owner: &User, folder: &Folder, name: &str) -> Result<(), AppError> {
        self.record("delete_file");
        self.with_owner(owner, |user| {
            folder_mut(user, &folder.name)?
                .files
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| AppError::FileNotFound(name.to_string()))
        })
    }

    fn list_files(
        &self,
        owner: &User,
        folder: &Folder,
        order: ListOrder,
    ) -> Result<Vec<File>, AppError> {
        self.record("list_files");
        self.with_owner(owner, |user| {
            let mut files: Vec<File> =
                folder_mut(user, &folder.name)?.files.values().cloned().collect();
            order.sort(&mut files);
            Ok(files)
        })
    }
}
