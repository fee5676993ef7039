//! Directory-tree adapter for the store ports.
//!
//! Mirrors the virtual filesystem onto real directories under a root:
//!
//! ```text
//! <root>/<user>/                         user
//! <root>/<user>/<folder>/                folder
//! <root>/<user>/<folder>/.folder.json    folder metadata
//! <root>/<user>/<folder>/<file>          file record (JSON)
//! ```
//!
//! Entity names never contain `.`, `/` or `\`, so a validated name always maps
//! to a direct child of its parent and never collides with the metadata sidecar.
//! Lookups with names that fail validation report "not found" without touching
//! the filesystem.

mod folder_store;
mod user_store;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, File, Folder, User, is_valid_name};

/// Name of the per-folder metadata sidecar.
pub const FOLDER_METADATA_FILE: &str = ".folder.json";

/// Kind of directory entry an entity is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Folder => "folder directory",
            EntryKind::File => "file record",
        }
    }
}

/// Store backed by a directory tree rooted at `root`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

/// On-disk form of a folder's own metadata; files are stored beside it.
#[derive(Debug, Serialize, Deserialize)]
struct FolderRecord {
    name: String,
    #[serde(default)]
    description: String,
    created_at: DateTime<Utc>,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory every user lives under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, username: &str) -> PathBuf {
        self.root.join(username)
    }

    /// Directory of a registered user, or `UserNotFound`.
    fn existing_user_dir(&self, username: &str) -> Result<PathBuf, AppError> {
        let dir = self.user_dir(username);
        if is_valid_name(username) && dir.is_dir() {
            Ok(dir)
        } else {
            Err(AppError::UserNotFound(username.to_string()))
        }
    }

    /// Directory of an existing folder, or `FolderNotFound`.
    fn existing_folder_dir(&self, user_dir: &Path, name: &str) -> Result<PathBuf, AppError> {
        let dir = user_dir.join(name);
        if is_valid_name(name) && entry_exists(&dir, EntryKind::Folder)? {
            Ok(dir)
        } else {
            Err(AppError::FolderNotFound(name.to_string()))
        }
    }

    /// Load a user together with every folder below its directory.
    fn load_user(&self, username: &str) -> Result<User, AppError> {
        let user_dir = self.existing_user_dir(username)?;
        let folders = read_folders(&user_dir)?
            .into_iter()
            .map(|folder| (folder.name.clone(), folder))
            .collect::<BTreeMap<_, _>>();
        Ok(User { username: username.to_string(), folders })
    }
}

/// Whether `path` holds an entry of `kind`.
///
/// An entry of another kind occupies the name without being usable, so it is
/// reported as an error instead of being treated as absent or as a duplicate.
fn entry_exists(path: &Path, kind: EntryKind) -> Result<bool, AppError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err.into()),
    };
    let matches = match kind {
        EntryKind::Folder => meta.is_dir(),
        EntryKind::File => meta.is_file(),
    };
    if matches {
        Ok(true)
    } else {
        Err(AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists but is not a {}", path.display(), kind.as_str()),
        )))
    }
}

/// Read every folder directory below `user_dir`.
fn read_folders(user_dir: &Path) -> Result<Vec<Folder>, AppError> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(user_dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_valid_name(&name) && path.is_dir() {
            folders.push(read_folder(&path, &name)?);
        }
    }
    Ok(folders)
}

/// Read a folder's metadata and files. Directories without a readable sidecar
/// fall back to an empty description and the directory's modification time.
fn read_folder(dir: &Path, name: &str) -> Result<Folder, AppError> {
    let sidecar = dir.join(FOLDER_METADATA_FILE);
    let record = match read_optional(&sidecar)? {
        Some(content) => match serde_json::from_str::<FolderRecord>(&content) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("ignoring unreadable folder metadata {}: {err}", sidecar.display());
                None
            }
        },
        None => None,
    };
    let (description, created_at) = match record {
        Some(record) => (record.description, record.created_at),
        None => (String::new(), modified_at(dir)?),
    };

    let files = read_files(dir)?.into_iter().map(|file| (file.name.clone(), file)).collect();
    Ok(Folder { name: name.to_string(), description, created_at, files })
}

/// Read a text file. Missing or non-UTF-8 content is `None`; other I/O errors
/// propagate.
fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err)
            if matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::InvalidData) =>
        {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn write_folder_record(dir: &Path, folder: &Folder) -> Result<(), AppError> {
    let record = FolderRecord {
        name: folder.name.clone(),
        description: folder.description.clone(),
        created_at: folder.created_at,
    };
    write_json(&dir.join(FOLDER_METADATA_FILE), &record)
}

/// Read every file record directly inside a folder directory.
fn read_files(folder_dir: &Path) -> Result<Vec<File>, AppError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(folder_dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_valid_name(&name) && path.is_file() {
            files.push(read_file(&path, &name)?);
        }
    }
    Ok(files)
}

/// Read a file record. Files whose body is not a record (e.g. placed by hand)
/// list with an empty description and their modification time.
fn read_file(path: &Path, name: &str) -> Result<File, AppError> {
    let parsed =
        read_optional(path)?.and_then(|content| serde_json::from_str::<File>(&content).ok());
    match parsed {
        Some(mut file) => {
            file.name = name.to_string();
            Ok(file)
        }
        None => Ok(File {
            name: name.to_string(),
            description: String::new(),
            created_at: modified_at(path)?,
        }),
    }
}

fn modified_at(path: &Path) -> Result<DateTime<Utc>, AppError> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data)?;
    debug!("wrote {}", path.display());
    Ok(())
}
