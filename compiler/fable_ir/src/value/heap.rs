//! Shared, immutable heap storage for value payloads.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// `Arc`-backed payload of a [`Value`](super::Value).
///
/// Only the `value` module can allocate one, so every heap payload is built
/// through a `Value` constructor.
#[derive(Clone, PartialEq, Eq)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// The payload, when this handle is its only owner.
    pub(super) fn get_mut(&mut self) -> Option<&mut T> {
        Arc::get_mut(&mut self.0)
    }

    /// Whether two handles share one allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
