use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::record::{QuoteRecord, RawQuote};
use crate::utils::hash::fingerprint;

/// Reasons a quote file cannot become a collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path} unreachable: {source}")]
    Unreachable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("quote data is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("quote data must be a list of quotes")]
    NotAList,

    #[error("quote data is empty")]
    Empty,

    #[error("quote data has no usable quotes ({0} records skipped)")]
    NoValidRecords(usize),
}

/// Validated, non-empty list of quotes in source order.
///
/// Built once and never mutated; a reload replaces it wholesale.
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    records: Vec<QuoteRecord>,
    fingerprint: String,
}

impl QuoteCollection {
    /// Keep the valid records. Fails when none are left.
    pub fn from_records(records: Vec<QuoteRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let total = records.len();
        let records: Vec<QuoteRecord> = records.into_iter().filter(|r| r.is_valid()).collect();
        if records.is_empty() {
            return Err(LoadError::NoValidRecords(total));
        }

        let fingerprint = fingerprint(records.iter().map(QuoteRecord::identity));
        Ok(QuoteCollection {
            records,
            fingerprint,
        })
    }

    /// Parse quote data. The payload must be a non-empty JSON array; records
    /// that fail validation are skipped.
    pub fn from_json(data: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(data)?;
        let items = match value {
            Value::Array(items) => items,
            _ => return Err(LoadError::NotAList),
        };
        if items.is_empty() {
            return Err(LoadError::Empty);
        }

        let total = items.len();
        let mut records = Vec::with_capacity(total);
        for (position, item) in items.into_iter().enumerate() {
            let parsed = serde_json::from_value::<RawQuote>(item)
                .ok()
                .and_then(QuoteRecord::from_raw);
            match parsed {
                Some(record) => records.push(record),
                None => tracing::debug!(position, "skipping invalid quote record"),
            }
        }

        if records.is_empty() {
            return Err(LoadError::NoValidRecords(total));
        }
        if records.len() < total {
            tracing::info!(
                kept = records.len(),
                skipped = total - records.len(),
                "some quote records were invalid"
            );
        }

        Self::from_records(records)
    }

    /// Read and parse a quote file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let data = fs::read_to_string(path).map_err(|source| LoadError::Unreachable {
            path: path.display().to_string(),
            source,
        })?;
        let collection = Self::from_json(&data)?;
        tracing::debug!(
            path = %path.display(),
            quotes = collection.len(),
            fingerprint = %collection.fingerprint,
            "loaded quotes"
        );
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuoteRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Short hash of every identity in order; changes when the file's
    /// quotes are edited, added, removed or reordered.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
