//! Session file under the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "mx";
const APP_ORG: &str = "PerformerLogistics";
const APP_NAME: &str = "PerformerConsole";
const STATE_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

fn state_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STATE_FILE))
}

/// A missing or unreadable file means "signed out"; it never blocks startup.
pub fn load_persisted_state() -> Option<PersistedState> {
    let path = state_file()?;
    load_from(&path)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = state_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)
}

fn load_from(path: &Path) -> Option<PersistedState> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => {
            debug!(path = %path.display(), "restored persisted session");
            Some(state)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "discarding unreadable session file");
            None
        }
    }
}

fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, Session};
    use pretty_assertions::assert_eq;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("performer-console-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn session_survives_round_trip_on_disk() {
        let path = scratch_file("roundtrip.json");
        let state = PersistedState {
            session: Some(Session {
                token: "jwt".into(),
                role: Role::Admin,
                name: "Luis".into(),
            }),
        };
        save_to(&path, &state).unwrap();
        let restored = load_from(&path).unwrap();
        assert_eq!(restored.session, state.session);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_reads_as_signed_out() {
        let path = scratch_file("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        assert!(load_from(&path).is_none());
        let _ = fs::remove_file(&path);
    }
}
