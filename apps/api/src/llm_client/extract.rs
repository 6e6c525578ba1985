//! Response Extractor — turns free-form model text into a JSON value the rest of the
//! service can trust.
//!
//! Model output is unreliable, so a reply that cannot be parsed is an expected outcome,
//! not an error: the caller supplies its own fallback payload and gets it back tagged
//! as `Extracted::Fallback`.

use serde_json::Value;
use tracing::warn;

const FENCE: &str = "```";

/// The top-level JSON kind a call site requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Object => value.is_object(),
            Shape::Array => value.is_array(),
        }
    }
}

/// Normalized model output.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// Parsed JSON whose top-level kind matches the requested shape.
    Structured(Value),
    /// The call site's default, substituted because extraction failed.
    Fallback(Value),
}

impl Extracted {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Extracted::Fallback(_))
    }

    pub fn value(&self) -> &Value {
        match self {
            Extracted::Structured(v) | Extracted::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Extracted::Structured(v) | Extracted::Fallback(v) => v,
        }
    }
}

/// Extracts a JSON payload of `shape` from `raw`, or returns `fallback()` tagged as
/// `Extracted::Fallback`. Never fails.
pub fn extract<F>(raw: &str, shape: Shape, fallback: F) -> Extracted
where
    F: FnOnce() -> Value,
{
    let parsed = strip_fence(raw.trim()).and_then(|body| serde_json::from_str::<Value>(body).ok());

    match parsed {
        Some(value) if shape.matches(&value) => Extracted::Structured(value),
        Some(_) => {
            warn!("Model reply has the wrong JSON shape (expected {shape:?}); using fallback");
            Extracted::Fallback(fallback())
        }
        None => {
            warn!("Model reply is not valid JSON; using fallback");
            Extracted::Fallback(fallback())
        }
    }
}

/// Strips a leading markdown code fence (with or without a language tag) and the last
/// closing fence. Returns `None` when a fence opens but no line follows it.
fn strip_fence(text: &str) -> Option<&str> {
    if !text.starts_with(FENCE) {
        return Some(text);
    }
    let (_, body) = text.split_once('\n')?;
    Some(body.rsplit_once(FENCE).map_or(body, |(inner, _)| inner))
}
