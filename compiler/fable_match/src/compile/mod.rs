//! Memoised pattern compilation.

use std::sync::Arc;

use fable_ir::PatternToken;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::grammar::tokenize;

/// Compiled token trees keyed by the exact pattern text.
///
/// Each distinct string is parsed at most once. A string that fails to parse
/// is cached as `None` and never parsed again. Entries are written once and
/// never evicted.
///
/// # Thread Safety
/// Lookups take a read lock. A miss re-checks under the write lock before
/// parsing, so two threads missing on the same string insert one entry.
#[derive(Debug, Default)]
pub struct CompileCache {
    entries: RwLock<FxHashMap<String, Option<Arc<PatternToken>>>>,
}

impl CompileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The token tree for `pattern`, or `None` if it does not parse.
    pub fn compile(&self, pattern: &str) -> Option<Arc<PatternToken>> {
        // Fast path: already compiled
        if let Some(entry) = self.entries.read().get(pattern) {
            return entry.clone();
        }

        let mut entries = self.entries.write();
        if let Some(entry) = entries.get(pattern) {
            return entry.clone();
        }

        debug!(pattern, "compiling pattern");
        let compiled = match tokenize(pattern) {
            Ok(token) => Some(Arc::new(token)),
            Err(failure) => {
                warn!(pattern, %failure, "pattern does not parse and will never match");
                None
            }
        };
        entries.insert(pattern.to_owned(), compiled.clone());
        compiled
    }

    /// Number of distinct pattern strings seen, including unparsable ones.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Whether `pattern` has been compiled, successfully or not.
    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.read().contains_key(pattern)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
