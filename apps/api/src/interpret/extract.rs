//! Locates the JSON payload embedded in a free-form completion.
//!
//! Models wrap JSON in prose, markdown fences, or both. Two strategies are
//! available. `Greedy` is the historical contract. `Balanced` is the default and
//! offers several candidates; the interpreter keeps the first one that parses.

use std::fmt;
use std::str::FromStr;

use crate::interpret::schema::Shape;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Every opening bracket whose value closes with properly nested brackets,
    /// leftmost first, then the `Greedy` span.
    #[default]
    Balanced,
    /// First opening bracket to the last closing bracket anywhere in the text.
    Greedy,
}

impl FromStr for ExtractionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "balanced" => Ok(ExtractionStrategy::Balanced),
            "greedy" => Ok(ExtractionStrategy::Greedy),
            other => Err(format!("expected 'balanced' or 'greedy', got '{other}'")),
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::Balanced => f.write_str("balanced"),
            ExtractionStrategy::Greedy => f.write_str("greedy"),
        }
    }
}

/// Returns the slices of `raw` that may hold the payload for `shape`, in the
/// order they should be tried. `Shape::Text` has no brackets and yields nothing.
///
/// `Balanced` lists every properly nested value from left to right and ends
/// with the greedy span, so a stray `{word}` in prose or a bracket hidden in a
/// single-quoted string still leaves the real payload reachable.
pub fn payload_candidates(raw: &str, shape: Shape, strategy: ExtractionStrategy) -> Vec<&str> {
    let Some((open, close)) = shape.brackets() else {
        return Vec::new();
    };

    let mut candidates = match strategy {
        ExtractionStrategy::Greedy => Vec::new(),
        ExtractionStrategy::Balanced => balanced_spans(raw, open),
    };
    if let Some(span) = greedy_span(raw, open, close) {
        if !candidates.contains(&span) {
            candidates.push(span);
        }
    }
    candidates
}

fn greedy_span(raw: &str, open: u8, close: u8) -> Option<&str> {
    let bytes = raw.as_bytes();
    let start = bytes.iter().position(|&b| b == open)?;
    let end = bytes.iter().rposition(|&b| b == close)?;
    (end > start).then(|| &raw[start..=end])
}

fn balanced_spans(raw: &str, open: u8) -> Vec<&str> {
    let bytes = raw.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == open)
        .filter_map(|(start, _)| closing_index(bytes, start).map(|end| &raw[start..=end]))
        .collect()
}

/// Index of the bracket closing the value that opens at `start`.
/// Brackets inside double-quoted strings are ignored; mismatched nesting aborts.
fn closing_index(bytes: &[u8], start: usize) -> Option<usize> {
    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => stack.push(b'}'),
            b'[' => stack.push(b']'),
            b'}' | b']' => {
                if stack.pop() != Some(b) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
