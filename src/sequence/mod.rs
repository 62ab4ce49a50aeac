pub mod daily;
pub mod selector;
pub mod state;

pub use daily::today_utc;
pub use selector::{select_next, Selection, SelectionMode};
pub use state::{SequenceState, StateMismatch};
