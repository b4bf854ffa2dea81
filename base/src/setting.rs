use async_once_cell::OnceCell;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use super::util::{mkdirp, non_blank};
use super::{CLI_NAME, SERVER_URL_ENV, TOKEN_ENV};

lazy_static! {
    pub static ref SETTINGS: Arc<OnceCell<Settings>> = Arc::new(OnceCell::new());
}

static CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings global store is unitialized")]
    Uninitialized,

    #[error("Could not locate program directories")]
    Directories,

    #[error("Could not read config file {0:?}: {1}")]
    Read(PathBuf, io::Error),

    #[error("Could not write config file {0:?}: {1}")]
    Write(PathBuf, io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the scraped releases get posted to. Both values are optional so
/// that an unconfigured install can still preview pages.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Settings {
    pub fn server_url(&self) -> Option<&str> {
        non_blank(self.server_url.as_deref())
    }

    pub fn token(&self) -> Option<&str> {
        non_blank(self.token.as_deref())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVER_URL_ENV) {
            self.server_url = Some(url);
        }
        if let Some(token) = lookup(TOKEN_ENV) {
            self.token = Some(token);
        }
        self
    }
}

pub fn default_path() -> Result<PathBuf, SettingsError> {
    let dirs = ProjectDirs::from("com", "github", CLI_NAME).ok_or(SettingsError::Directories)?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

fn resolve(path: Option<PathBuf>) -> Result<PathBuf, SettingsError> {
    match path {
        Some(p) => Ok(p),
        None => default_path(),
    }
}

/// Reads the config file only, without environment overrides. A missing
/// file is an empty configuration.
pub fn load_file(path: &Path) -> Result<Settings, SettingsError> {
    log::trace!("Loading config file: {:?}", path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(SettingsError::Read(path.to_path_buf(), e)),
    };
    Ok(toml::from_str(content.as_str())?)
}

pub fn load(path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let path = resolve(path)?;
    let set = load_file(&path)?.with_overrides(|key| std::env::var(key).ok());
    log::trace!("Loaded settings: {:?}", set);
    Ok(set)
}

pub fn save(settings: &Settings, path: Option<PathBuf>) -> Result<PathBuf, SettingsError> {
    let path = resolve(path)?;
    if let Some(parent) = path.parent() {
        mkdirp(parent).map_err(|e| SettingsError::Write(path.clone(), e))?;
    }
    let content = toml::to_string(settings)?;
    fs::write(&path, content).map_err(|e| SettingsError::Write(path.clone(), e))?;
    log::debug!("Saved settings to {:?}", path);
    Ok(path)
}

pub fn print(settings: &Settings) -> Result<String, SettingsError> {
    Ok(toml::to_string(settings)?)
}

pub fn get_settings() -> Result<&'static Settings, SettingsError> {
    SETTINGS.get().ok_or(SettingsError::Uninitialized)
}
