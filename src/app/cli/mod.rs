//! CLI Adapter.

mod file;
mod folder;
mod listing;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::VirtualFileSystem;
use crate::app::api;
use crate::app::config::{Config, OUT_ENV};
use crate::domain::AppError;
use crate::ports::{FolderStore, UserStore};

use listing::SortArgs;

#[derive(Parser)]
#[command(name = "vfsctl")]
#[command(version)]
#[command(about = "Manage a virtual filesystem of users, folders and files", long_about = None)]
struct Cli {
    /// Output path: a `.json` document or a directory root
    #[arg(long, global = true, env = OUT_ENV)]
    out: Option<PathBuf>,
    /// TOML config file (defaults to ~/.config/vfsctl/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        username: String,
    },
    /// Create a folder for a user
    CreateFolder {
        username: String,
        foldername: String,
        /// Free-text description
        #[arg(default_value = "")]
        description: String,
    },
    /// Delete a folder and its files
    DeleteFolder {
        username: String,
        foldername: String,
    },
    /// Rename a folder
    RenameFolder {
        username: String,
        foldername: String,
        new_foldername: String,
    },
    /// List a user's folders
    ListFolders {
        username: String,
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Create a file in a folder
    CreateFile {
        username: String,
        foldername: String,
        filename: String,
        /// Free-text description
        #[arg(default_value = "")]
        description: String,
    },
    /// Delete a file from a folder
    DeleteFile {
        username: String,
        foldername: String,
        filename: String,
    },
    /// List the files in a folder
    ListFiles {
        username: String,
        foldername: String,
        #[command(flatten)]
        sort: SortArgs,
    },
}

/// Entry point for the CLI.
///
/// Failing to set up the store exits with status 1. A failing command prints
/// `Error: ...` and the process still exits normally.
pub fn run() {
    let cli = Cli::parse();

    let vfs = match Config::resolve(cli.out, cli.config.as_deref()).and_then(|c| api::open(&c)) {
        Ok(vfs) => vfs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dispatch(&vfs, cli.command) {
        eprintln!("Error: {}", e);
    }
}

fn dispatch<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    command: Commands,
) -> Result<(), AppError> {
    match command {
        Commands::Register { username } => run_register(vfs, &username),
        Commands::CreateFolder { username, foldername, description } => {
            folder::run_create(vfs, &username, &foldername, &description)
        }
        Commands::DeleteFolder { username, foldername } => {
            folder::run_delete(vfs, &username, &foldername)
        }
        Commands::RenameFolder { username, foldername, new_foldername } => {
            folder::run_rename(vfs, &username, &foldername, &new_foldername)
        }
        Commands::ListFolders { username, sort } => folder::run_list(vfs, &username, &sort),
        Commands::CreateFile { username, foldername, filename, description } => {
            file::run_create(vfs, &username, &foldername, &filename, &description)
        }
        Commands::DeleteFile { username, foldername, filename } => {
            file::run_delete(vfs, &username, &foldername, &filename)
        }
        Commands::ListFiles { username, foldername, sort } => {
            file::run_list(vfs, &username, &foldername, &sort)
        }
    }
}

fn run_register<U: UserStore, F: FolderStore>(
    vfs: &VirtualFileSystem<U, F>,
    username: &str,
) -> Result<(), AppError> {
    let user = vfs.register_user(username)?;
    println!("Add {} successfully.", user.username);
    Ok(())
}
