use super::open_engine;
use crate::config::Config;
use crate::error::Result;
use crate::share::{system_dispatcher, ShareChannel, ShareError, ShareOutcome};
use crate::templates::{
    COPIED, COPY_MANUALLY, GENERATE_FIRST, INSTAGRAM_NOT_COPIED, INSTAGRAM_STEPS,
    OPEN_LINK_MANUALLY,
};

#[derive(Debug, Clone, Copy)]
pub struct ShareOptions {
    pub channel: ShareChannel,
    pub print_url: bool,
}

pub fn run(config: &Config, options: ShareOptions) -> Result<()> {
    let engine = open_engine(config)?;
    let text = engine.share_text(&config.attribution);

    let mut dispatcher = system_dispatcher().with_print_urls(options.print_url);
    match dispatcher.dispatch(options.channel, &text, &config.attribution) {
        Ok(outcome) => {
            tracing::info!(channel = ?options.channel, "share finished");
            if let Some(message) = report(&outcome) {
                println!("{}", message);
            }
        }
        Err(ShareError::NothingToShare) => println!("{}", GENERATE_FIRST),
        Err(e) => eprintln!("{}", e),
    }

    Ok(())
}

/// What to tell the user about a share. Dismissal says nothing.
fn report(outcome: &ShareOutcome) -> Option<String> {
    match outcome {
        ShareOutcome::Shared | ShareOutcome::Dismissed => None,
        ShareOutcome::Copied => Some(COPIED.to_string()),
        ShareOutcome::Manual(text) => Some(format!("{}\n\n{}", COPY_MANUALLY, text)),
        ShareOutcome::Opened(url) => Some(format!("Opened {}", url)),
        ShareOutcome::Link(url) => Some(format!("{}\n{}", OPEN_LINK_MANUALLY, url)),
        ShareOutcome::Instagram { copied: true, .. } => Some(INSTAGRAM_STEPS.to_string()),
        ShareOutcome::Instagram {
            copied: false,
            text,
        } => Some(format!(
            "{}\n\n{}\n\n{}",
            INSTAGRAM_STEPS, INSTAGRAM_NOT_COPIED, text
        )),
        ShareOutcome::Printed(text) => Some(text.clone()),
    }
}
