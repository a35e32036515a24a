//! Structured parse failures.

use std::borrow::Cow;
use std::fmt;

/// Longest slice of unconsumed input shown in a rendered failure.
const PREVIEW_CHARS: usize = 16;

/// Why a primitive did not match: what was expected, where, and the input
/// that was left unconsumed at that point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFailure {
    /// The input from `index` to the end.
    pub unconsumed: String,
    /// Byte offset where the primitive was tried.
    pub index: usize,
    /// Description of what would have matched.
    pub expected: Cow<'static, str>,
}

impl ParseFailure {
    #[cold]
    pub fn new(input: &str, index: usize, expected: impl Into<Cow<'static, str>>) -> Self {
        ParseFailure {
            unconsumed: input.get(index..).unwrap_or_default().to_owned(),
            index,
            expected: expected.into(),
        }
    }

    /// Whether the failure happened with no input left.
    pub fn at_end(&self) -> bool {
        self.unconsumed.is_empty()
    }

    /// Of two optional failures, the one that got further into the input.
    /// Ties keep `a`.
    pub fn furthest(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.index > a.index { b } else { a }),
            (a, b) => a.or(b),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} at index {}, found ", self.expected, self.index)?;
        if self.at_end() {
            return f.write_str("end of input");
        }
        let preview: String = self.unconsumed.chars().take(PREVIEW_CHARS).collect();
        if preview.len() < self.unconsumed.len() {
            write!(f, "\"{preview}...\"")
        } else {
            write!(f, "\"{preview}\"")
        }
    }
}

impl std::error::Error for ParseFailure {}
