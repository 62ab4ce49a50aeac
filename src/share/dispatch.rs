use thiserror::Error;

use super::channel::ShareChannel;
use super::format::{Attribution, SharePayload};

/// Share failures. Only `NothingToShare` reaches the user as such; the rest
/// drive the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("nothing to share yet")]
    NothingToShare,

    /// The user closed the share sheet. Not a failure.
    #[error("share dismissed")]
    Dismissed,

    #[error("native sharing is not supported on this device")]
    Unsupported,

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("could not open link: {0}")]
    Launch(String),
}

/// What actually happened to a share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the share sheet
    Shared,
    /// Share sheet closed by the user
    Dismissed,
    /// Share text is on the clipboard
    Copied,
    /// Every automatic channel failed; the user has to copy this by hand
    Manual(String),
    /// Link opened in the browser
    Opened(String),
    /// Link to open by hand
    Link(String),
    /// Instagram instructions apply; `copied` tells whether the text made it
    /// to the clipboard
    Instagram { copied: bool, text: String },
    /// Text written out as-is
    Printed(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError>;
}

pub trait UrlLauncher {
    fn open(&mut self, url: &str) -> Result<(), ShareError>;
}

pub trait ShareSheet {
    /// `Err(ShareError::Dismissed)` when the user cancels.
    fn present(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Routes share text to a channel, degrading native share → clipboard →
/// manual copy.
pub struct ShareDispatcher {
    clipboard: Box<dyn Clipboard>,
    launcher: Box<dyn UrlLauncher>,
    sheet: Box<dyn ShareSheet>,
    print_urls: bool,
}

impl ShareDispatcher {
    pub fn new(
        clipboard: Box<dyn Clipboard>,
        launcher: Box<dyn UrlLauncher>,
        sheet: Box<dyn ShareSheet>,
    ) -> Self {
        ShareDispatcher {
            clipboard,
            launcher,
            sheet,
            print_urls: false,
        }
    }

    /// Return links instead of opening them.
    pub fn with_print_urls(mut self, print_urls: bool) -> Self {
        self.print_urls = print_urls;
        self
    }

    /// Share `text` on `channel`. `text` is the formatted share text, empty
    /// when no quote is on display.
    pub fn dispatch(
        &mut self,
        channel: ShareChannel,
        text: &str,
        attribution: &Attribution,
    ) -> Result<ShareOutcome, ShareError> {
        if channel.needs_text() && text.trim().is_empty() {
            return Err(ShareError::NothingToShare);
        }

        if let Some(url) = channel.intent_url(text, attribution) {
            return Ok(self.open_link(url));
        }

        let outcome = match channel {
            ShareChannel::Native => {
                let payload = SharePayload::new(text.to_string(), attribution);
                match self.sheet.present(&payload) {
                    Ok(()) => ShareOutcome::Shared,
                    Err(ShareError::Dismissed) => ShareOutcome::Dismissed,
                    Err(e) => {
                        tracing::info!(error = %e, "share sheet failed, copying instead");
                        self.copy(text)
                    }
                }
            }
            ShareChannel::Instagram => {
                let copied = match self.clipboard.write_text(text) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::debug!(error = %e, "instagram copy failed");
                        false
                    }
                };
                ShareOutcome::Instagram {
                    copied,
                    text: text.to_string(),
                }
            }
            ShareChannel::Print => ShareOutcome::Printed(text.to_string()),
            _ => self.copy(text),
        };
        Ok(outcome)
    }

    fn copy(&mut self, text: &str) -> ShareOutcome {
        match self.clipboard.write_text(text) {
            Ok(()) => ShareOutcome::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                ShareOutcome::Manual(text.to_string())
            }
        }
    }

    fn open_link(&mut self, url: String) -> ShareOutcome {
        if self.print_urls {
            return ShareOutcome::Link(url);
        }
        match self.launcher.open(&url) {
            Ok(()) => ShareOutcome::Opened(url),
            Err(e) => {
                tracing::warn!(error = %e, "could not open share link");
                ShareOutcome::Link(url)
            }
        }
    }
}
