use chrono::NaiveDate;

use super::{open_engine, render_quote};
use crate::config::Config;
use crate::error::Result;
use crate::sequence::{today_utc, SelectionMode};

/// Show the quote of the day. `date` defaults to today in UTC.
pub fn run(config: &Config, date: Option<NaiveDate>) -> Result<()> {
    let mut engine = open_engine(config)?;
    let day = date.unwrap_or_else(today_utc);
    let record = engine.next(SelectionMode::Daily, day);
    println!("{}", render_quote(record));
    Ok(())
}
