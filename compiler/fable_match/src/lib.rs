//! Fable Match - string patterns over tagged-union values.
//!
//! A pattern such as `Cons(Some(a), _)` is written as a string, compiled
//! once per dispatcher, and matched against any value implementing
//! [`TaggedValue`]:
//!
//! ```text
//! pattern string ──tokenize──▶ PatternToken ──extract(value)──▶ Bindings
//!                 (CompileCache)                   (Dispatcher: first match wins)
//! ```
//!
//! # Modules
//!
//! - `grammar`: the pattern grammar, built from `fable_combinator` parsers
//! - `compile`: per-dispatcher memoisation of pattern strings
//! - `extract`: lockstep walk of a token tree and a value, collecting binders
//! - `dispatch`: ordered cases, default fallback, the `cases!` macro
//!
//! # Pattern Language
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `_` | anything, binds nothing |
//! | `x` | anything, binds it (unless `x` names a sibling variant) |
//! | `None` | a value whose variant is `None`, when `None` is a sibling |
//! | `"text"`, `42`, `-1.5` | an equal string or number |
//! | `Some(p)` | a `Some` variant whose first field matches `p` |
//!
//! Excess pattern arguments or value fields are ignored.

mod compile;
mod dispatch;
mod extract;
mod grammar;

pub use compile::CompileCache;
pub use dispatch::{
    compile_patterns, Case, CaseReport, DispatchConfig, Dispatcher, Handler, MatchError,
    DEFAULT_PATTERN,
};
pub use extract::{extract, Bindings, Mismatch};
pub use fable_ir::{PatternToken, TaggedValue, Value};
pub use grammar::tokenize;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fable_match=debug`
/// (cache misses and unparsable patterns) or `RUST_LOG=fable_match=trace`
/// (every case attempt).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
