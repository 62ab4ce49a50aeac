use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{PersistError, PersistedState, StateStore};
use crate::utils::fs::{remove_if_exists, state_path, write_atomic};

/// JSON state file under the state directory (`.calmquote/sequence.v1.json`
/// by default).
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Store inside `state_dir`, using the versioned file name.
    pub fn in_dir(state_dir: &Path) -> Self {
        FileStateStore {
            path: state_path(state_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistError::Read(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| PersistError::Malformed(e.to_string()))
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent() {
            if dir.exists() && !dir.is_dir() {
                return Err(PersistError::Unavailable(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| PersistError::Malformed(e.to_string()))?;
        write_atomic(&self.path, &json).map_err(PersistError::Write)
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        remove_if_exists(&self.path).map_err(PersistError::Write)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
