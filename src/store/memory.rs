use super::{PersistError, PersistedState, StateStore};

/// In-memory store for tests.
///
/// Can be told to fail loads or saves to exercise the recovery paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    state: Option<PersistedState>,
    /// Whether load should fail
    pub fail_load: bool,
    /// Whether save should fail
    pub fail_save: bool,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        MemoryStateStore {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<&PersistedState> {
        self.state.as_ref()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistError> {
        if self.fail_load {
            return Err(PersistError::Unavailable("load disabled".to_string()));
        }
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), PersistError> {
        if self.fail_save {
            return Err(PersistError::Unavailable("quota exceeded".to_string()));
        }
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.state = None;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
