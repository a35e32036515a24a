//! Runtime values the match engine can inspect.
//!
//! The engine only needs a small capability contract from a value, captured
//! by [`TaggedValue`]. [`Value`] is the dynamic representation shipped with
//! this crate: primitives plus variants of a [`UnionDef`].
//!
//! # Heap Sharing
//!
//! Strings and variant field lists live behind [`Heap`], a thin `Arc`
//! wrapper whose constructor is private to this module. Cloning a `Value`
//! never deep-copies, so bound values handed to match handlers are cheap to
//! keep.

mod builtin;
mod heap;
mod union;

use std::fmt;
use std::sync::Arc;

use fable_stack::ensure_sufficient_stack;

pub use heap::Heap;
pub use union::{UnionBuilder, UnionDef, ValueError, VariantDef};

/// A primitive literal kind a pattern can compare against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'a> {
    Str(&'a str),
    Number(f64),
}

/// Capability contract for values that can be matched against patterns.
///
/// A value is either a variant of some tagged union (it has a variant name
/// and an ordered, fixed-arity field list) or a primitive. Primitives report
/// no variant name, no fields and no siblings.
pub trait TaggedValue: Sized {
    /// The variant this value was built from, e.g. `"Cons"`.
    fn variant_name(&self) -> Option<&str>;

    /// Name of the union the variant belongs to, e.g. `"List"`.
    ///
    /// Used to check the qualifier of dotted patterns such as `List.Cons`.
    fn union_name(&self) -> Option<&str> {
        None
    }

    /// Field values in declaration order. Empty for nullary variants.
    fn variant_fields(&self) -> &[Self];

    /// Whether `name` is a variant of the same union as this value
    /// (the value's own variant included).
    fn is_sibling_variant(&self, name: &str) -> bool;

    /// The primitive literal this value is, if any.
    fn literal(&self) -> Option<Literal<'_>>;
}

/// Dynamic runtime value.
#[derive(Clone)]
pub enum Value {
    Str(Heap<String>),
    Number(f64),
    Bool(bool),
    /// A variant of a user-declared or built-in union.
    Variant(VariantValue),
}

/// A constructed variant: its union, which variant, and the field values.
#[derive(Clone)]
pub struct VariantValue {
    union: Arc<UnionDef>,
    tag: usize,
    fields: Heap<Vec<Value>>,
}

// Long `Cons` chains are built one level at a time, so they are torn down the
// same way: uniquely owned fields move onto a work list instead of recursing.
impl Drop for VariantValue {
    fn drop(&mut self) {
        let Some(fields) = self.fields.get_mut() else {
            return;
        };
        let mut pending = std::mem::take(fields);
        while let Some(value) = pending.pop() {
            if let Value::Variant(mut variant) = value {
                if let Some(inner) = variant.fields.get_mut() {
                    pending.append(inner);
                }
            }
        }
    }
}

impl VariantValue {
    /// Callers guarantee `tag` indexes `union` and `fields` has its arity.
    fn new_unchecked(union: Arc<UnionDef>, tag: usize, fields: Vec<Value>) -> Self {
        VariantValue {
            union,
            tag,
            fields: Heap::new(fields),
        }
    }

    pub fn union(&self) -> &UnionDef {
        &self.union
    }

    pub fn def(&self) -> &VariantDef {
        self.union.variant_at(self.tag)
    }

    pub fn name(&self) -> &str {
        self.def().name()
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Field value by declared field name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let position = self.def().field_names().iter().position(|f| f == name)?;
        self.fields.get(position)
    }
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    pub fn as_variant(&self) -> Option<&VariantValue> {
        match self {
            Value::Variant(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short description of the value's kind, for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Variant(v) => v.union.name(),
        }
    }
}

impl TaggedValue for Value {
    fn variant_name(&self) -> Option<&str> {
        self.as_variant().map(VariantValue::name)
    }

    fn union_name(&self) -> Option<&str> {
        self.as_variant().map(|v| v.union.name())
    }

    fn variant_fields(&self) -> &[Self] {
        match self {
            Value::Variant(v) => v.fields(),
            _ => &[],
        }
    }

    fn is_sibling_variant(&self, name: &str) -> bool {
        self.as_variant()
            .is_some_and(|v| v.union.variant_index(name).is_some())
    }

    fn literal(&self) -> Option<Literal<'_>> {
        match self {
            Value::Str(s) => Some(Literal::Str(s.as_str())),
            Value::Number(n) => Some(Literal::Number(*n)),
            Value::Bool(_) | Value::Variant(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Heap::new(s))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

// Equality and formatting recurse through fields, which for a `List` is as
// deep as the list is long.

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Variant(a), Value::Variant(b)) => a == b,
            _ => false,
        })
    }
}

impl PartialEq for VariantValue {
    fn eq(&self, other: &Self) -> bool {
        let same_union =
            Arc::ptr_eq(&self.union, &other.union) || self.union.name() == other.union.name();
        same_union && self.name() == other.name() && self.fields() == other.fields()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Variant(v) => write!(f, "{v}"),
        })
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if self.fields.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{self}", self.union.name())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
