//! Lockstep matching of a token tree against a value.
//!
//! At each block the head must name the value's variant. Arguments are then
//! zipped with the value's fields; whichever list is longer has its excess
//! ignored. Binders are collected in the order they appear in the pattern.

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

use fable_ir::{IdentPath, Literal, PatternToken, TaggedValue};
use fable_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::trace;

/// Why a pattern did not match a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// A block head or sibling tag named a different variant.
    #[error("expected variant `{expected}`, found `{found}`")]
    Namespace { expected: String, found: String },
    /// A block met a primitive value.
    #[error("expected variant `{expected}`, found a value with no variant")]
    NotAVariant { expected: String },
    /// A literal met a value of another kind or a different value.
    #[error("expected {expected}, found {found}")]
    Literal { expected: String, found: String },
    /// The pattern string itself does not parse.
    #[error("pattern `{pattern}` does not parse")]
    InvalidPattern { pattern: String },
}

impl Mismatch {
    #[cold]
    fn namespace(expected: &IdentPath, found: String) -> Self {
        Mismatch::Namespace {
            expected: expected.as_dotted(),
            found,
        }
    }

    #[cold]
    fn not_a_variant(expected: &IdentPath) -> Self {
        Mismatch::NotAVariant {
            expected: expected.as_dotted(),
        }
    }

    #[cold]
    fn literal<V: TaggedValue>(expected: &PatternToken, found: &V) -> Self {
        let found = match found.literal() {
            Some(Literal::Str(s)) => format!("string {s:?}"),
            Some(Literal::Number(n)) => format!("number {n}"),
            None => match found.variant_name() {
                Some(name) => format!("variant `{name}`"),
                None => "a non-literal value".to_owned(),
            },
        };
        Mismatch::Literal {
            expected: expected.to_string(),
            found,
        }
    }

    #[cold]
    pub(crate) fn invalid_pattern(pattern: &str) -> Self {
        Mismatch::InvalidPattern {
            pattern: pattern.to_owned(),
        }
    }
}

/// Values captured by a successful match, in pattern order.
///
/// Each entry pairs the binder's name with the value it captured. Handlers
/// usually read them positionally.
pub struct Bindings<'a, V> {
    entries: SmallVec<[(Cow<'a, str>, &'a V); 4]>,
}

impl<'a, V> Bindings<'a, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `index`-th captured value.
    pub fn get(&self, index: usize) -> Option<&'a V> {
        self.entries.get(index).map(|&(_, value)| value)
    }

    /// The value captured by the first binder called `name`.
    pub fn named(&self, name: &str) -> Option<&'a V> {
        self.entries
            .iter()
            .find(|(binder, _)| binder == name)
            .map(|&(_, value)| value)
    }

    /// Binder names, in pattern order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_ref())
    }

    /// Captured values, in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = &'a V> + '_ {
        self.entries.iter().map(|&(_, value)| value)
    }

    fn bind(&mut self, name: &'a IdentPath, value: &'a V) {
        let name = if name.is_simple() {
            Cow::Borrowed(name.last())
        } else {
            Cow::Owned(name.as_dotted())
        };
        self.entries.push((name, value));
    }
}

impl<V> Default for Bindings<'_, V> {
    fn default() -> Self {
        Bindings {
            entries: SmallVec::new(),
        }
    }
}

impl<V> Index<usize> for Bindings<'_, V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        self.entries[index].1
    }
}

impl<V: fmt::Debug> fmt::Debug for Bindings<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, value)| (name, value)))
            .finish()
    }
}

/// Match `pattern` against `value`, collecting what its binders capture.
pub fn extract<'a, V: TaggedValue>(
    pattern: &'a PatternToken,
    value: &'a V,
) -> Result<Bindings<'a, V>, Mismatch> {
    let mut bindings = Bindings::default();
    let result = match_token(pattern, value, &mut bindings);
    trace!(%pattern, ok = result.is_ok(), bound = bindings.len(), "extract");
    result.map(|()| bindings)
}

fn match_token<'a, V: TaggedValue>(
    token: &'a PatternToken,
    value: &'a V,
    out: &mut Bindings<'a, V>,
) -> Result<(), Mismatch> {
    match token {
        PatternToken::Wildcard => Ok(()),
        PatternToken::Block { head, args } => {
            let Some(found) = value.variant_name() else {
                return Err(Mismatch::not_a_variant(head));
            };
            check_head(head, found, value)?;
            ensure_sufficient_stack(|| {
                args.iter()
                    .zip(value.variant_fields())
                    .try_for_each(|(arg, field)| match_token(arg, field, out))
            })
        }
        PatternToken::Ident(path) if value.is_sibling_variant(path.last()) => {
            let found = value.variant_name().unwrap_or_default();
            check_head(path, found, value)
        }
        PatternToken::Ident(path) => {
            out.bind(path, value);
            Ok(())
        }
        PatternToken::Str(expected) => match value.literal() {
            Some(Literal::Str(found)) if found == expected => Ok(()),
            _ => Err(Mismatch::literal(token, value)),
        },
        PatternToken::Number(expected) => match value.literal() {
            #[allow(clippy::float_cmp, reason = "numeric literals compare exactly")]
            Some(Literal::Number(found)) if found == *expected => Ok(()),
            _ => Err(Mismatch::literal(token, value)),
        },
    }
}

/// `head` must name `found`. A qualifier must name the value's union when
/// the value reports one.
fn check_head<V: TaggedValue>(head: &IdentPath, found: &str, value: &V) -> Result<(), Mismatch> {
    let union = value.union_name();
    let qualifier_ok = match (head.qualifier(), union) {
        (Some(qualifier), Some(union)) => qualifier == union,
        _ => true,
    };
    if head.last() == found && qualifier_ok {
        return Ok(());
    }
    let found = match union {
        Some(union) if !head.is_simple() => format!("{union}.{found}"),
        _ => found.to_owned(),
    };
    Err(Mismatch::namespace(head, found))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
