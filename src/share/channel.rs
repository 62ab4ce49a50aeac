use clap::ValueEnum;
use urlencoding::encode;

use super::format::Attribution;

/// Destinations a quote can be shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShareChannel {
    /// Copy the share text to the clipboard
    Copy,
    /// System share sheet, falling back to the clipboard
    Native,
    /// WhatsApp send link
    Whatsapp,
    /// SMS compose link
    Sms,
    /// Facebook Messenger link share (shares the site, not the text)
    Messenger,
    /// Pinterest pin with the preview image
    Pinterest,
    /// Copy the text and explain how to post it as a story
    Instagram,
    /// Write the share text to stdout
    Print,
}

impl ShareChannel {
    /// Whether the channel carries the quote text. Messenger only shares the
    /// site link, so it works before any quote was shown.
    pub fn needs_text(self) -> bool {
        !matches!(self, ShareChannel::Messenger)
    }

    /// Share-intent URL for link-based channels, `None` for the others.
    pub fn intent_url(self, text: &str, attribution: &Attribution) -> Option<String> {
        match self {
            ShareChannel::Whatsapp => Some(format!(
                "https://api.whatsapp.com/send?text={}",
                encode(text)
            )),
            ShareChannel::Sms => Some(format!("sms:?body={}", encode(text))),
            ShareChannel::Messenger => Some(format!(
                "https://www.messenger.com/share/?link={}",
                encode(attribution.site_url())
            )),
            ShareChannel::Pinterest => Some(format!(
                "https://pinterest.com/pin/create/button/?url={}&media={}&description={}",
                encode(attribution.site_url()),
                encode(&attribution.preview_image_url()),
                encode(text)
            )),
            ShareChannel::Copy
            | ShareChannel::Native
            | ShareChannel::Instagram
            | ShareChannel::Print => None,
        }
    }
}
