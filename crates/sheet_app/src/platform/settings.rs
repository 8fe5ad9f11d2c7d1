use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sheet_engine::ClientSettings;
use sheet_logging::{sheet_info, sheet_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

pub(crate) const DEFAULT_SETTINGS_FILE: &str = ".sheet_client.ron";

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings file {0:?} already exists")]
    AlreadyExists(PathBuf),
    #[error("could not serialize settings: {0}")]
    Serialize(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// On-disk form of [`ClientSettings`], durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    base_url: Option<String>,
    connect_timeout_ms: u64,
    request_timeout_ms: u64,
    max_response_bytes: u64,
    notification_dismiss_ms: u64,
}

impl Default for SettingsFile {
    fn default() -> Self {
        let defaults = ClientSettings::default();
        Self {
            base_url: defaults.base_url,
            connect_timeout_ms: millis(defaults.connect_timeout),
            request_timeout_ms: millis(defaults.request_timeout),
            max_response_bytes: defaults.max_response_bytes,
            notification_dismiss_ms: millis(defaults.notification_dismiss),
        }
    }
}

impl From<SettingsFile> for ClientSettings {
    fn from(file: SettingsFile) -> Self {
        Self {
            base_url: file.base_url,
            connect_timeout: Duration::from_millis(file.connect_timeout_ms),
            request_timeout: Duration::from_millis(file.request_timeout_ms),
            max_response_bytes: file.max_response_bytes,
            notification_dismiss: Duration::from_millis(file.notification_dismiss_ms),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Reads settings from `path`, falling back to defaults when the file is
/// missing, unreadable or malformed.
pub(crate) fn load_settings(path: &Path) -> ClientSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return ClientSettings::default();
        }
        Err(err) => {
            sheet_warn!("Failed to read settings from {:?}: {}", path, err);
            return ClientSettings::default();
        }
    };

    match ron::from_str::<SettingsFile>(&content) {
        Ok(file) => {
            sheet_info!("Loaded settings from {:?}", path);
            file.into()
        }
        Err(err) => {
            sheet_warn!("Failed to parse settings from {:?}: {}", path, err);
            ClientSettings::default()
        }
    }
}

/// Writes the default settings to `path` via a temp file and rename.
pub(crate) fn write_default_settings(path: &Path, overwrite: bool) -> Result<(), SettingsError> {
    if path.exists() && !overwrite {
        return Err(SettingsError::AlreadyExists(path.to_path_buf()));
    }

    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(&SettingsFile::default(), pretty)
        .map_err(|err| SettingsError::Serialize(err.to_string()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| SettingsError::Io(e.error))?;
    sheet_info!("Wrote default settings to {:?}", path);
    Ok(())
}
