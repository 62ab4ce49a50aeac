pub mod collection;
pub mod record;

pub use collection::{LoadError, QuoteCollection};
pub use record::QuoteRecord;
