//! Fable Combinator - string parser combinators.
//!
//! A [`Parser<T>`] is an immutable function from `(input, index)` to a
//! [`Reply<T>`]: the new index, the attempt result, and an optional failure
//! context that records how far a repetition got before it gave up.
//!
//! Parsers are `Arc`-backed and `Send + Sync`, so a grammar is built once
//! and shared freely across threads. Composition:
//!
//! | Operation | Meaning |
//! |-----------|---------|
//! | [`regex`], [`string`] | anchored primitives yielding the matched text |
//! | [`Parser::chain`] | monadic bind: the next parser depends on the value |
//! | [`Parser::also`] | like `chain`, concatenating both value lists |
//! | [`Parser::many`] | greedy repetition, never fails |
//! | [`Parser::or_else`] / `\|` | ordered choice from the same position |
//! | [`Parser::map`] | transform the value |
//! | [`Parser::skip`] | run a follower, keep this value |
//! | [`Parser::parse`] | run from 0, then assert end of input |
//!
//! Failures carry the unconsumed slice and the index, and propagate through
//! sequencing unchanged.

mod failure;
mod parser;
mod primitives;

pub use failure::ParseFailure;
pub use parser::{Parser, Reply};
pub use primitives::{eof, fail, recursive, regex, string, succeed};

/// Error returned by [`regex`] for an invalid pattern.
pub use ::regex::Error as RegexError;
