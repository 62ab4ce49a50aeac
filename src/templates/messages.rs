/// Placeholder shown when the quote file cannot be used
pub const LOAD_FAILED: &str = "\
Unable to load quotes.
Please check back later.";

/// Prompt for sharing before any quote was shown
pub const GENERATE_FIRST: &str = "Please generate a quote first. Run `calmquote next`.";

pub const COPIED: &str = "Copied";

/// Shown with the text when neither share sheet nor clipboard worked
pub const COPY_MANUALLY: &str = "Unable to copy this quote on this device. Copy it from below:";

pub const OPEN_LINK_MANUALLY: &str = "Open this link to share:";

pub const INSTAGRAM_STEPS: &str = "\
Instagram only allows photo/video story uploads.

Your quote will be copied. Then:
1. Open Instagram
2. Create a Story or Reel
3. Paste the text onto the screen.";

pub const INSTAGRAM_NOT_COPIED: &str = "Could not reach the clipboard; the text is below:";
