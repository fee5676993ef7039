//! Folder command implementations.

use crate::app::VirtualFileSystem;
use crate::domain::AppError;
use crate::ports::{FolderStore, UserStore};

use super::listing::{SortArgs, folder_line};

pub fn run_create<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    foldername: &str,
    description: &str,
) -> Result<(), AppError> {
    let folder = vfs.create_folder(username, foldername, description)?;
    println!("Create {} successfully.", folder.name);
    Ok(())
}

pub fn run_delete<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    foldername: &str,
) -> Result<(), AppError> {
    vfs.delete_folder(username, foldername)?;
    println!("Delete {} successfully.", foldername);
    Ok(())
}

pub fn run_rename<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    foldername: &str,
    new_foldername: &str,
) -> Result<(), AppError> {
    vfs.rename_folder(username, foldername, new_foldername)?;
    println!("Rename {} to {} successfully.", foldername, new_foldername);
    Ok(())
}

pub fn run_list<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    sort: &SortArgs,
) -> Result<(), AppError> {
    let folders = vfs.list_folders(username, sort.order())?;
    if folders.is_empty() {
        eprintln!("Warning: The {} doesn't have any folders.", username);
        return Ok(());
    }
    for folder in &folders {
        println!("{}", folder_line(folder, username));
    }
    Ok(())
}
