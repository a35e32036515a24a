//! Fable IR - shared data for the fable match engine.
//!
//! This crate contains:
//! - `PatternToken`, the token tree a pattern string compiles to
//! - `TaggedValue`, the capability contract a runtime value implements to be
//!   matched (variant name, ordered fields, sibling variants, literal kind)
//! - `Value` and `UnionDef`, a dynamic tagged-union representation that
//!   implements `TaggedValue`, with the built-in `Option`, `List` and
//!   `Either` unions
//!
//! The matcher in `fable_match` is generic over `TaggedValue`; `Value` is the
//! representation used when the caller has no tagged-union type of its own.

mod token;
mod value;

pub use token::{IdentPath, PatternToken};
pub use value::{
    Heap, Literal, TaggedValue, UnionBuilder, UnionDef, Value, ValueError, VariantDef,
    VariantValue,
};
