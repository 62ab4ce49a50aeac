pub mod channel;
pub mod dispatch;
pub mod format;
pub mod system;

pub use channel::ShareChannel;
pub use dispatch::{ShareDispatcher, ShareError, ShareOutcome};
pub use format::{format_share_text, Attribution};
pub use system::system_dispatcher;
