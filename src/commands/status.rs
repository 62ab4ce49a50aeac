use super::open_engine;
use crate::config::Config;
use crate::error::Result;
use crate::quote::QuoteRecord;
use crate::sequence::SequenceState;
use crate::store::StateStore;

pub fn run(config: &Config) -> Result<()> {
    let engine = open_engine(config)?;
    let collection = engine.collection();

    println!("Calmquote Status");
    println!("────────────────");
    println!(
        "Quotes:  {} ({})",
        collection.len(),
        config.quotes_path().display()
    );
    println!("         fingerprint {}", collection.fingerprint());
    println!("Pass:    {}", pass_summary(engine.sequence()));
    println!("Current: {}", current_summary(engine.current()));
    println!("State:   {}", engine.store().describe());
    println!(
        "Share:   {} <{}>",
        config.attribution.site_name(),
        config.attribution.site_url()
    );

    Ok(())
}

/// Progress through the shuffled pass
fn pass_summary(sequence: &SequenceState) -> String {
    if sequence.is_exhausted() {
        format!(
            "{} of {} shown, reshuffles on next quote",
            sequence.cursor(),
            sequence.len()
        )
    } else {
        format!(
            "{} of {} shown, {} remaining",
            sequence.cursor(),
            sequence.len(),
            sequence.remaining()
        )
    }
}

/// One-line description of the quote on display
fn current_summary(current: Option<&QuoteRecord>) -> String {
    match current {
        None => "None (run `calmquote next`)".to_string(),
        Some(record) if record.author.is_empty() => format!("\"{}\"", record.identity()),
        Some(record) => format!("\"{}\" — {}", record.identity(), record.author),
    }
}
