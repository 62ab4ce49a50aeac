//! Share sinks backed by the operating system.

use super::dispatch::{Clipboard, ShareDispatcher, ShareError, ShareSheet, UrlLauncher};
use super::format::SharePayload;

/// OS clipboard through `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}

/// Default browser / URL handler through `open`.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn open(&mut self, url: &str) -> Result<(), ShareError> {
        open::that(url).map_err(|e| ShareError::Launch(e.to_string()))
    }
}

/// Terminals have no share sheet.
#[derive(Debug, Default)]
pub struct TerminalShareSheet;

impl ShareSheet for TerminalShareSheet {
    fn present(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        tracing::debug!(title = %payload.title, url = %payload.url, "no share sheet in a terminal");
        Err(ShareError::Unsupported)
    }
}

/// Dispatcher wired to the real clipboard and browser.
pub fn system_dispatcher() -> ShareDispatcher {
    ShareDispatcher::new(
        Box::new(SystemClipboard),
        Box::new(SystemLauncher),
        Box::new(TerminalShareSheet),
    )
}
