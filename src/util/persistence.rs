use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ReviewLift";
const APP_NAME: &str = "ReviewLift";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    load_from(&data_file()?)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)
}

pub fn load_from(path: &Path) -> Option<PersistedState> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("Ignoring unreadable settings at {}: {err}", path.display());
            None
        }
    }
}

pub fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    log::debug!("Saved settings to {}", path.display());
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FunnelParams, FunnelPreset, FunnelSettings};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn settings_survive_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let state = PersistedState {
            funnel: FunnelSettings {
                preset: FunnelPreset::Custom,
                custom: FunnelParams::new(75.0, 0.03),
            },
        };

        save_to(&path, &state).unwrap();
        assert_eq!(load_from(&path), Some(state));
    }

    #[test]
    fn missing_or_corrupt_files_load_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(load_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), None);
    }
}
