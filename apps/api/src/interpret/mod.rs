//! Response Interpreter. Turns a raw completion into a validated JSON value.
//!
//! Flow: locate the candidate payloads → strict parse → one quote-repair pass →
//! shape and required-key validation on the first candidate that parses. The parsed value is returned untouched;
//! extra keys are kept and nothing is coerced.

pub mod extract;
pub mod schema;

use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

pub use extract::ExtractionStrategy;
pub use schema::{ResultSchema, Shape};

use extract::payload_candidates;

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("no JSON payload found")]
    NoPayload,

    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unexpected top-level shape (expected {expected:?})")]
    UnexpectedShape { expected: Shape },

    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    strategy: ExtractionStrategy,
}

impl Interpreter {
    pub fn new(strategy: ExtractionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    /// Interprets `raw` against `schema`.
    ///
    /// Text schemas skip extraction entirely: the completion is wrapped as
    /// `{"response": raw}` and returned.
    pub fn interpret(&self, raw: &str, schema: ResultSchema) -> Result<Value, InterpretError> {
        let value = match schema.shape() {
            Shape::Text => json!({ "response": raw }),
            shape => first_parsed(&payload_candidates(raw, shape, self.strategy))?,
        };

        schema.validate(&value)?;
        Ok(value)
    }
}

/// Parses the candidates in order and keeps the first that succeeds. When none
/// does, the error from the last candidate is returned.
fn first_parsed(candidates: &[&str]) -> Result<Value, InterpretError> {
    let mut last_error = InterpretError::NoPayload;
    for payload in candidates {
        match parse_with_repair(payload) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}

/// Strict parse, then a single retry with every single quote turned into a
/// double quote.
fn parse_with_repair(payload: &str) -> Result<Value, InterpretError> {
    serde_json::from_str(payload).or_else(|err| {
        debug!("Strict JSON parse failed ({err}), retrying with repaired quotes");
        let repaired = payload.replace('\'', "\"");
        serde_json::from_str(repaired.trim()).map_err(InterpretError::Malformed)
    })
}
