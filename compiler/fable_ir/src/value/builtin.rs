//! Built-in unions: `Option`, `List` and `Either`.

use std::sync::{Arc, LazyLock};

use super::{UnionDef, Value, VariantValue};

static OPTION: LazyLock<Arc<UnionDef>> = LazyLock::new(|| {
    UnionDef::builder("Option")
        .variant("Some", &["value"])
        .variant("None", &[])
        .build_distinct()
});

static LIST: LazyLock<Arc<UnionDef>> = LazyLock::new(|| {
    UnionDef::builder("List")
        .variant("Cons", &["head", "tail"])
        .variant("Nil", &[])
        .build_distinct()
});

static EITHER: LazyLock<Arc<UnionDef>> = LazyLock::new(|| {
    UnionDef::builder("Either")
        .variant("Left", &["value"])
        .variant("Right", &["value"])
        .build_distinct()
});

// Tags follow the declaration order above.
const SOME: usize = 0;
const NONE: usize = 1;
const CONS: usize = 0;
const NIL: usize = 1;
const LEFT: usize = 0;
const RIGHT: usize = 1;

fn variant(union: &Arc<UnionDef>, tag: usize, fields: Vec<Value>) -> Value {
    Value::Variant(VariantValue::new_unchecked(Arc::clone(union), tag, fields))
}

impl UnionDef {
    /// The built-in `Option` union (`Some(value)`, `None`).
    pub fn option() -> Arc<UnionDef> {
        Arc::clone(&OPTION)
    }

    /// The built-in `List` union (`Cons(head, tail)`, `Nil`).
    pub fn list() -> Arc<UnionDef> {
        Arc::clone(&LIST)
    }

    /// The built-in `Either` union (`Left(value)`, `Right(value)`).
    pub fn either() -> Arc<UnionDef> {
        Arc::clone(&EITHER)
    }
}

impl Value {
    pub fn some(value: impl Into<Value>) -> Self {
        variant(&OPTION, SOME, vec![value.into()])
    }

    pub fn none() -> Self {
        variant(&OPTION, NONE, Vec::new())
    }

    /// Wrap an optional value: `Some(v)` or `None`.
    pub fn option(value: Option<Value>) -> Self {
        value.map_or_else(Value::none, Value::some)
    }

    pub fn cons(head: impl Into<Value>, tail: Value) -> Self {
        variant(&LIST, CONS, vec![head.into(), tail])
    }

    pub fn nil() -> Self {
        variant(&LIST, NIL, Vec::new())
    }

    /// Build a `Cons` chain ending in `Nil`, preserving iteration order.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        items
            .into_iter()
            .rev()
            .fold(Value::nil(), |tail, head| Value::cons(head, tail))
    }

    pub fn left(value: impl Into<Value>) -> Self {
        variant(&EITHER, LEFT, vec![value.into()])
    }

    pub fn right(value: impl Into<Value>) -> Self {
        variant(&EITHER, RIGHT, vec![value.into()])
    }
}
