use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use vfsctl::{AppError, Backend, Config, ListOrder, open, open_backend};

#[test]
fn open_picks_backend_from_config() {
    let dir = TempDir::new().unwrap();
    let json = Config::with_out(dir.path().join("vfs.json"));
    assert!(matches!(json.backend().unwrap(), Backend::Json(_)));

    let vfs = open(&json).unwrap();
    let user = vfs.register_user("alice").unwrap();
    assert_eq!(user.username, "alice");
    assert!(user.folders.is_empty());
    assert!(vfs.list_folders("alice", ListOrder::default()).unwrap().is_empty());
}

#[test]
fn state_is_reloaded_between_facades() {
    let dir = TempDir::new().unwrap();
    let backend = Backend::Json(dir.path().join("vfs.json"));

    let first = open_backend(&backend);
    first.register_user("alice").unwrap();
    first.create_folder("alice", "docs", "").unwrap();

    let second = open_backend(&backend);
    assert!(matches!(second.create_folder("alice", "docs", ""), Err(AppError::FolderExists(_))));
    second.delete_folder("alice", "docs").unwrap();

    assert!(matches!(
        first.list_files("alice", "docs", ListOrder::default()),
        Err(AppError::FolderNotFound(_))
    ));
}

#[test]
fn concurrent_creates_on_one_facade_are_serialized() {
    let dir = TempDir::new().unwrap();
    let store = vfsctl::adapters::JsonStore::new(dir.path().join("vfs.json"));
    let vfs = Arc::new(vfsctl::VirtualFileSystem::new(store.clone(), store));
    vfs.register_user("alice").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let vfs = Arc::clone(&vfs);
            thread::spawn(move || vfs.create_folder("alice", &format!("f{i}"), "").unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(vfs.list_folders("alice", ListOrder::default()).unwrap().len(), 8);
}
