//! Stack growth for recursive descent over pattern trees.
//!
//! Pattern strings are short, but the values they are matched against are
//! not: a `List` built from a long iterator nests one `Cons` per element, and
//! a pattern like `Cons(_, Cons(_, Cons(a, _)))` walks that chain
//! recursively. Both the grammar and the extractor wrap their recursive step
//! in [`ensure_sufficient_stack`] so deep inputs grow the stack instead of
//! overflowing it.
//!
//! On native targets this delegates to `stacker`; on `wasm32` it is a plain
//! call.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
