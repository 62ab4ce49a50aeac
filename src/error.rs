use thiserror::Error;

use crate::quote::LoadError;
use crate::store::PersistError;

/// Exit codes
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_LOAD_FAILED: i32 = 2;

/// Errors that end a command.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Only for explicit state commands; selection never fails on storage.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Load(_) => EXIT_LOAD_FAILED,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
