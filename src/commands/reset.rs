use super::open_engine;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::{FileStateStore, StateStore};

pub fn run(config: &Config) -> Result<()> {
    match open_engine(config) {
        Ok(mut engine) => {
            engine.reset();
            println!(
                "Sequence reset: {} quotes in a new pass.",
                engine.collection().len()
            );
        }
        // Without quotes there is no pass to restart, but stale state can
        // still be dropped.
        Err(Error::Load(e)) => {
            tracing::info!(error = %e, "quotes unavailable, clearing state only");
            FileStateStore::in_dir(&config.state_dir).clear()?;
            println!("Sequence state cleared ({}).", config.state_file().display());
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
