use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn starts_empty() {
    let cache = CompileCache::new();
    assert!(cache.is_empty());
    assert!(!cache.contains("_"));
}

#[test]
fn hit_returns_same_tree() {
    let cache = CompileCache::new();
    let first = cache.compile("Some(a)").unwrap();
    let second = cache.compile("Some(a)").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn keys_are_exact_text() {
    let cache = CompileCache::new();
    let tight = cache.compile("Some(a)").unwrap();
    let loose = cache.compile("Some( a )").unwrap();
    assert_eq!(tight, loose);
    assert!(!Arc::ptr_eq(&tight, &loose));
    assert_eq!(cache.len(), 2);
}

#[test]
fn failures_are_cached() {
    let cache = CompileCache::new();
    assert_eq!(cache.compile("Some(a"), None);
    assert!(cache.contains("Some(a"));
    assert_eq!(cache.compile("Some(a"), None);
    assert_eq!(cache.len(), 1);
}

#[test]
fn concurrent_misses_insert_once() {
    let cache = CompileCache::new();
    let trees: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| cache.compile("Cons(x, Cons(y, _))").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(cache.len(), 1);
    assert!(trees.iter().all(|tree| Arc::ptr_eq(tree, &trees[0])));
}

proptest! {
    #[test]
    fn compile_is_idempotent(pattern in "[A-Za-z_(), \"0-9]{0,16}") {
        let cache = CompileCache::new();
        let first = cache.compile(&pattern);
        let fresh = CompileCache::new().compile(&pattern);
        prop_assert_eq!(&first, &cache.compile(&pattern));
        prop_assert_eq!(first, fresh);
    }
}
