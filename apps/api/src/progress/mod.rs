//! Progress Accumulator: week-by-week score history.
//!
//! History is append-only and kept in insertion order. A result without a
//! usable week number is assigned `history length + 1` at append time.

pub mod store;

use serde::Serialize;
use serde_json::{Number, Value};

pub use store::{InMemoryProgressStore, ProgressStore};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressEntry {
    pub week: u32,
    /// Kept exactly as the model produced it (integer or float).
    pub score: Number,
}

/// An entry whose week may still need assigning.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDraft {
    pub week: Option<u32>,
    pub score: Number,
}

impl ProgressDraft {
    /// Reads a draft from an interpreted (or fallback) progress result.
    ///
    /// A week is usable only if it is a JSON integer ≥ 1 that fits in u32.
    /// The score is validated as numeric upstream; a non-number reads as 0.
    pub fn from_result(value: &Value) -> Self {
        let week = value
            .get("week")
            .and_then(Value::as_u64)
            .filter(|w| *w >= 1)
            .and_then(|w| u32::try_from(w).ok());

        let score = match value.get("progress_score") {
            Some(Value::Number(n)) => n.clone(),
            _ => Number::from(0u32),
        };

        Self { week, score }
    }

    /// Fixes the week against a history that currently holds `history_len` entries.
    pub fn resolve(self, history_len: usize) -> ProgressEntry {
        let week = self
            .week
            .unwrap_or_else(|| u32::try_from(history_len + 1).unwrap_or(u32::MAX));
        ProgressEntry {
            week,
            score: self.score,
        }
    }
}

/// The state of the history right after an append.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub latest: ProgressEntry,
    pub history: Vec<ProgressEntry>,
}
