pub mod daily;
pub mod next;
pub mod reset;
pub mod share;
pub mod status;

use crate::config::Config;
use crate::engine::QuoteEngine;
use crate::error::Result;
use crate::quote::{QuoteCollection, QuoteRecord};
use crate::share::{format_share_text, Attribution};
use crate::store::FileStateStore;

/// Load the quote file and restore the engine from the state directory
pub fn open_engine(config: &Config) -> Result<QuoteEngine<FileStateStore>> {
    let collection = QuoteCollection::load(config.quotes_path())?;
    let store = FileStateStore::in_dir(&config.state_dir);
    Ok(QuoteEngine::open(collection, store))
}

/// Terminal rendering of a quote: the share layout without the attribution
/// footer.
pub fn render_quote(record: &QuoteRecord) -> String {
    format_share_text(record, &Attribution::new("", ""))
}
