use chrono::NaiveDate;
use rand::Rng;

use super::daily::daily_index;
use super::state::SequenceState;
use crate::quote::{QuoteCollection, QuoteRecord};

/// How the next quote is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Next entry of the shuffled pass; no repeats within a pass.
    Random,
    /// Quote of the UTC day; ignores the sequence state.
    Daily,
}

/// A chosen quote and its position in the collection.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub index: usize,
    pub record: &'a QuoteRecord,
}

/// Choose the next quote and return the updated state.
///
/// `state` must have been built for `collection` (same length); callers
/// restore it through [`SequenceState::from_parts`]. The collection is never
/// empty, so this always yields a quote.
pub fn select_next<'a, R: Rng + ?Sized>(
    collection: &'a QuoteCollection,
    state: &SequenceState,
    mode: SelectionMode,
    today: NaiveDate,
    rng: &mut R,
) -> (Selection<'a>, SequenceState) {
    let len = collection.len();
    let mut next = state.clone();

    let index = match mode {
        SelectionMode::Daily => daily_index(today, len),
        SelectionMode::Random => {
            if next.len() != len {
                tracing::warn!(
                    state_len = next.len(),
                    collection_len = len,
                    "sequence does not match collection, starting a new pass"
                );
                next = SequenceState::fresh(len, rng);
            }
            next.advance(rng)
        }
    };

    let record = &collection.records()[index];
    (Selection { index, record }, next)
}
