use super::{open_engine, render_quote};
use crate::config::Config;
use crate::error::Result;
use crate::sequence::{today_utc, SelectionMode};

pub fn run(config: &Config) -> Result<()> {
    let mut engine = open_engine(config)?;
    let record = engine.next(SelectionMode::Random, today_utc());
    println!("{}", render_quote(record));
    Ok(())
}
