use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Shuffle-cursor bookkeeping: a permutation of collection indices consumed
/// front to back.
///
/// `cursor == order.len()` means the pass is exhausted; the next random
/// selection reshuffles before serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceState {
    order: Vec<usize>,
    cursor: usize,
}

/// Why a stored order/cursor pair was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateMismatch {
    #[error("order has {found} entries, collection has {expected}")]
    Length { expected: usize, found: usize },

    #[error("order is not a permutation")]
    NotPermutation,

    #[error("cursor {cursor} beyond order length {len}")]
    CursorOutOfRange { cursor: usize, len: usize },
}

impl SequenceState {
    /// A freshly shuffled pass over `len` quotes, cursor at the start.
    pub fn fresh<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        SequenceState { order, cursor: 0 }
    }

    /// Rebuild a state from stored parts, checking it against a collection of
    /// `len` quotes.
    pub fn from_parts(order: Vec<usize>, cursor: usize, len: usize) -> Result<Self, StateMismatch> {
        if order.len() != len {
            return Err(StateMismatch::Length {
                expected: len,
                found: order.len(),
            });
        }

        let mut seen = vec![false; len];
        for &index in &order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(StateMismatch::NotPermutation),
            }
        }

        if cursor > len {
            return Err(StateMismatch::CursorOutOfRange { cursor, len });
        }

        Ok(SequenceState { order, cursor })
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Quotes left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    /// Take the index under the cursor and advance. Reshuffles first when the
    /// pass is exhausted, so the caller always gets an index.
    pub(crate) fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.is_exhausted() {
            self.order.shuffle(rng);
            self.cursor = 0;
            tracing::debug!(len = self.order.len(), "pass exhausted, reshuffled");
        }

        let index = self.order[self.cursor];
        self.cursor += 1;
        index
    }
}
