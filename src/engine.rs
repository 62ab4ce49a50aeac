use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::quote::{QuoteCollection, QuoteRecord};
use crate::sequence::{select_next, SelectionMode, SequenceState, StateMismatch};
use crate::share::{format_share_text, Attribution};
use crate::store::{PersistedState, StateStore};

/// Why stored state was not reused.
#[derive(Debug, Error)]
enum RestoreError {
    #[error("quote file changed (stored {stored}, now {current})")]
    Fingerprint { stored: String, current: String },

    #[error(transparent)]
    Shape(#[from] StateMismatch),

    #[error("current quote {index} out of range for {len} quotes")]
    Current { index: usize, len: usize },
}

/// Owns the quotes, the sequence state and where that state is kept.
///
/// Every selection mutates the state and persists it before returning.
/// Persistence failures are logged and otherwise ignored.
pub struct QuoteEngine<S: StateStore> {
    collection: QuoteCollection,
    sequence: SequenceState,
    current: Option<usize>,
    store: S,
    rng: StdRng,
}

impl<S: StateStore> QuoteEngine<S> {
    pub fn open(collection: QuoteCollection, store: S) -> Self {
        Self::with_rng(collection, store, StdRng::from_entropy())
    }

    /// Like [`QuoteEngine::open`] with a caller-provided generator.
    pub fn with_rng(collection: QuoteCollection, store: S, mut rng: StdRng) -> Self {
        let restored = match store.load() {
            Ok(Some(persisted)) => match restore(&collection, persisted) {
                Ok(parts) => {
                    tracing::debug!("restored sequence state");
                    Some(parts)
                }
                Err(reason) => {
                    tracing::info!(%reason, "discarding stored sequence state");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not load sequence state, starting fresh");
                None
            }
        };

        let (sequence, current) =
            restored.unwrap_or_else(|| (SequenceState::fresh(collection.len(), &mut rng), None));

        QuoteEngine {
            collection,
            sequence,
            current,
            store,
            rng,
        }
    }

    /// Select and remember the next quote.
    pub fn next(&mut self, mode: SelectionMode, today: NaiveDate) -> &QuoteRecord {
        let (selection, sequence) =
            select_next(&self.collection, &self.sequence, mode, today, &mut self.rng);
        let index = selection.index;
        tracing::debug!(index, ?mode, quote = %selection.record.identity(), "selected quote");

        self.sequence = sequence;
        self.current = Some(index);
        self.persist();

        &self.collection.records()[index]
    }

    /// The quote last presented, if any.
    pub fn current(&self) -> Option<&QuoteRecord> {
        self.current.and_then(|i| self.collection.get(i))
    }

    /// Share text for the current quote; empty when nothing is on display.
    pub fn share_text(&self, attribution: &Attribution) -> String {
        self.current()
            .map(|record| format_share_text(record, attribution))
            .unwrap_or_default()
    }

    /// Start a new pass and forget the current quote.
    pub fn reset(&mut self) {
        self.sequence = SequenceState::fresh(self.collection.len(), &mut self.rng);
        self.current = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "could not clear sequence state");
        }
    }

    pub fn collection(&self) -> &QuoteCollection {
        &self.collection
    }

    pub fn sequence(&self) -> &SequenceState {
        &self.sequence
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let state = PersistedState {
            fingerprint: self.collection.fingerprint().to_string(),
            order: self.sequence.order().to_vec(),
            cursor: self.sequence.cursor(),
            current: self.current,
        };
        if let Err(e) = self.store.save(&state) {
            tracing::warn!(error = %e, "could not save sequence state, continuing in memory");
        }
    }
}

fn restore(
    collection: &QuoteCollection,
    persisted: PersistedState,
) -> Result<(SequenceState, Option<usize>), RestoreError> {
    if persisted.fingerprint != collection.fingerprint() {
        return Err(RestoreError::Fingerprint {
            stored: persisted.fingerprint,
            current: collection.fingerprint().to_string(),
        });
    }

    let len = collection.len();
    let sequence = SequenceState::from_parts(persisted.order, persisted.cursor, len)?;

    if let Some(index) = persisted.current {
        if index >= len {
            return Err(RestoreError::Current { index, len });
        }
    }

    Ok((sequence, persisted.current))
}
