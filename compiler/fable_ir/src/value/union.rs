//! Union declarations: a named set of variants with fixed field lists.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::{Value, VariantValue};

/// Errors raised while declaring unions or constructing their variants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("union `{union}` has no variant `{variant}`")]
    UnknownVariant { union: String, variant: String },

    #[error("variant `{union}.{variant}` takes {expected} field(s), got {got}")]
    ArityMismatch {
        union: String,
        variant: String,
        expected: usize,
        got: usize,
    },

    #[error("union `{union}` declares variant `{variant}` more than once")]
    DuplicateVariant { union: String, variant: String },
}

/// One variant of a union: its name and declared field names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDef {
    name: String,
    fields: SmallVec<[String; 2]>,
}

impl VariantDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// A tagged union declaration.
///
/// The variant list doubles as the sibling registry the matcher consults to
/// tell a nullary tag pattern (`None`) apart from a binder (`x`).
#[derive(Debug)]
pub struct UnionDef {
    name: String,
    variants: Vec<VariantDef>,
    by_name: FxHashMap<String, usize>,
}

/// Incremental declaration of a [`UnionDef`].
#[derive(Debug)]
pub struct UnionBuilder {
    name: String,
    variants: Vec<VariantDef>,
}

impl UnionBuilder {
    /// Add a variant with its field names, in declaration order.
    #[must_use]
    pub fn variant(mut self, name: &str, fields: &[&str]) -> Self {
        self.variants.push(VariantDef {
            name: name.to_owned(),
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
        });
        self
    }

    /// Finish the declaration, rejecting duplicate variant names.
    pub fn build(self) -> Result<Arc<UnionDef>, ValueError> {
        let mut by_name = FxHashMap::default();
        for (tag, def) in self.variants.iter().enumerate() {
            if by_name.insert(def.name.clone(), tag).is_some() {
                return Err(ValueError::DuplicateVariant {
                    union: self.name.clone(),
                    variant: def.name.clone(),
                });
            }
        }
        Ok(Arc::new(UnionDef {
            name: self.name,
            variants: self.variants,
            by_name,
        }))
    }

    /// Finish a declaration whose variant names are known to be distinct.
    pub(super) fn build_distinct(self) -> Arc<UnionDef> {
        let by_name = self
            .variants
            .iter()
            .enumerate()
            .map(|(tag, def)| (def.name.clone(), tag))
            .collect();
        Arc::new(UnionDef {
            name: self.name,
            variants: self.variants,
            by_name,
        })
    }
}

impl UnionDef {
    /// Start declaring a union named `name`.
    pub fn builder(name: &str) -> UnionBuilder {
        UnionBuilder {
            name: name.to_owned(),
            variants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[VariantDef] {
        &self.variants
    }

    /// Names of every variant, in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(VariantDef::name)
    }

    pub fn variant_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn variant(&self, name: &str) -> Option<&VariantDef> {
        self.variant_index(name).map(|tag| &self.variants[tag])
    }

    /// Variant by tag; tags come from `variant_index` and are always in range.
    pub(super) fn variant_at(&self, tag: usize) -> &VariantDef {
        &self.variants[tag]
    }

    /// Construct `variant` with `fields`, checking the declared arity.
    pub fn construct(
        self: &Arc<Self>,
        variant: &str,
        fields: Vec<Value>,
    ) -> Result<Value, ValueError> {
        let Some(tag) = self.variant_index(variant) else {
            return Err(self.unknown_variant(variant));
        };
        let expected = self.variants[tag].arity();
        if fields.len() != expected {
            return Err(ValueError::ArityMismatch {
                union: self.name.clone(),
                variant: variant.to_owned(),
                expected,
                got: fields.len(),
            });
        }
        Ok(Value::Variant(VariantValue::new_unchecked(
            Arc::clone(self),
            tag,
            fields,
        )))
    }

    /// Construct a nullary variant.
    pub fn unit(self: &Arc<Self>, variant: &str) -> Result<Value, ValueError> {
        self.construct(variant, Vec::new())
    }

    #[cold]
    fn unknown_variant(&self, variant: &str) -> ValueError {
        ValueError::UnknownVariant {
            union: self.name.clone(),
            variant: variant.to_owned(),
        }
    }
}
