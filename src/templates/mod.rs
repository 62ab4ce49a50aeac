pub mod messages;

pub use messages::{
    COPIED, COPY_MANUALLY, GENERATE_FIRST, INSTAGRAM_NOT_COPIED, INSTAGRAM_STEPS, LOAD_FAILED,
    OPEN_LINK_MANUALLY,
};
