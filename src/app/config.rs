//! Output path resolution and backend selection.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::domain::AppError;

/// Output path used when neither the command line nor a config file names one.
pub const DEFAULT_OUT: &str = "out/vfs.json";

/// Environment variable read by clap for `--out`.
pub const OUT_ENV: &str = "VFSCTL_OUT";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Output path, same meaning as `--out`.
    #[serde(default)]
    pub out: Option<PathBuf>,
}

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON document or directory root that holds the virtual filesystem.
    pub out: PathBuf,
}

impl Config {
    pub fn with_out(out: impl Into<PathBuf>) -> Self {
        Self { out: out.into() }
    }

    /// Resolve the configuration.
    ///
    /// `out` (from `--out` or `VFSCTL_OUT`) wins. Otherwise the `out` key of the
    /// config file is used: `config_path` when given, which must exist, else
    /// `$HOME/.config/vfsctl/config.toml` when present. Falls back to
    /// [`DEFAULT_OUT`].
    pub fn resolve(out: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self, AppError> {
        if let Some(out) = out {
            return Ok(Self::with_out(out));
        }

        let file = match config_path {
            Some(path) => Some(load_config_file(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(load_config_file(&path)?),
                _ => None,
            },
        };

        let out = file.and_then(|f| f.out).unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
        Ok(Self::with_out(out))
    }

    /// Storage backend implied by the output path.
    pub fn backend(&self) -> Result<Backend, AppError> {
        Backend::detect(&self.out)
    }
}

/// `$HOME/.config/vfsctl/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("vfsctl").join("config.toml"))
}

fn load_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    debug!("reading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

pub fn parse_config_content(content: &str) -> Result<ConfigFile, AppError> {
    Ok(toml::from_str(content)?)
}

/// Persistence mechanism selected for an output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Single JSON document at the path.
    Json(PathBuf),
    /// Directory tree rooted at the path.
    Directory(PathBuf),
}

impl Backend {
    /// Pick a backend for `path`.
    ///
    /// A `.json` path that is not an existing directory is a JSON document. Any
    /// other path that is not an existing regular file is a directory root.
    pub fn detect(path: &Path) -> Result<Self, AppError> {
        if path.as_os_str().is_empty() {
            return Err(AppError::config_error("Output path must not be empty"));
        }

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Backend::Directory(path.to_path_buf())),
            Ok(_) if is_json => Ok(Backend::Json(path.to_path_buf())),
            Ok(_) => Err(AppError::config_error(format!(
                "Output path {} is a file but not a .json document",
                path.display()
            ))),
            Err(_) if is_json => Ok(Backend::Json(path.to_path_buf())),
            Err(_) => Ok(Backend::Directory(path.to_path_buf())),
        }
    }
}
