//! File command implementations.

use crate::app::VirtualFileSystem;
use crate::domain::AppError;
use crate::ports::{FolderStore, UserStore};

use super::listing::{SortArgs, file_line};

pub fn run_create<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    foldername: &str,
    filename: &str,
    description: &str,
) -> Result<(), AppError> {
    let file = vfs.create_file(username, foldername, filename, description)?;
    println!("Create {} in {}/{} successfully.", file.name, username, foldername);
    Ok(())
}

pub fn run_delete<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    foldername: &str,
    filename: &str,
) -> Result<(), AppError> {
    vfs.delete_file(username, foldername, filename)?;
    println!("Delete {} in {}/{} successfully.", filename, username, foldername);
    Ok(())
}

pub fn run_list<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
    foldername: &str,
    sort: &SortArgs,
) -> Result<(), AppError> {
    let files = vfs.list_files(username, foldername, sort.order())?;
    if files.is_empty() {
        eprintln!("Warning: The folder is empty.");
        return Ok(());
    }
    for file in &files {
        println!("{}", file_line(file, foldername, username));
    }
    Ok(())
}
