use super::*;
use pretty_assertions::assert_eq;

fn pair_union() -> Arc<UnionDef> {
    UnionDef::builder("Pair")
        .variant("Pair", &["first", "second"])
        .build()
        .unwrap()
}

#[test]
fn builtin_option_reports_variant_and_siblings() {
    let some = Value::some(1);
    assert_eq!(some.variant_name(), Some("Some"));
    assert_eq!(some.union_name(), Some("Option"));
    assert_eq!(some.variant_fields(), &[Value::number(1)]);
    assert!(some.is_sibling_variant("None"));
    assert!(some.is_sibling_variant("Some"));
    assert!(!some.is_sibling_variant("Nil"));

    let none = Value::none();
    assert!(none.variant_fields().is_empty());
    assert!(none.is_sibling_variant("Some"));
}

#[test]
fn primitives_have_no_variant() {
    for value in [Value::string("a"), Value::number(2), Value::Bool(true)] {
        assert_eq!(value.variant_name(), None);
        assert!(value.variant_fields().is_empty());
        assert!(!value.is_sibling_variant("None"));
    }
}

#[test]
fn literal_kinds() {
    assert_eq!(Value::string("hi").literal(), Some(Literal::Str("hi")));
    assert_eq!(Value::number(4.5).literal(), Some(Literal::Number(4.5)));
    assert_eq!(Value::Bool(false).literal(), None);
    assert_eq!(Value::none().literal(), None);
}

#[test]
fn list_preserves_order() {
    let list = Value::list([1, 2, 3]);
    assert_eq!(list.to_string(), "Cons(1, Cons(2, Cons(3, Nil)))");
    assert_eq!(
        list,
        Value::cons(1, Value::cons(2, Value::cons(3, Value::nil())))
    );
}

#[test]
fn different_variants_are_never_equal() {
    assert_ne!(Value::left(1), Value::right(1));
    assert_ne!(Value::some(Value::none()), Value::none());
    assert_eq!(Value::option(None), Value::none());
    assert_eq!(Value::option(Some(Value::from("x"))), Value::some("x"));
}

#[test]
fn construct_checks_arity() {
    let pair = pair_union();
    let ok = pair
        .construct("Pair", vec![Value::number(1), Value::string("b")])
        .unwrap();
    assert_eq!(ok.to_string(), "Pair(1, \"b\")");
    assert_eq!(
        ok.as_variant().and_then(|v| v.field("second")),
        Some(&Value::string("b"))
    );

    let err = pair.construct("Pair", vec![Value::number(1)]).unwrap_err();
    assert_eq!(
        err,
        ValueError::ArityMismatch {
            union: "Pair".into(),
            variant: "Pair".into(),
            expected: 2,
            got: 1,
        }
    );
    assert_eq!(
        err.to_string(),
        "variant `Pair.Pair` takes 2 field(s), got 1"
    );
}

#[test]
fn construct_rejects_unknown_variant() {
    let err = UnionDef::option().unit("Nothing").unwrap_err();
    assert_eq!(err.to_string(), "union `Option` has no variant `Nothing`");
}

#[test]
fn builder_rejects_duplicate_variants() {
    let err = UnionDef::builder("Twice")
        .variant("A", &[])
        .variant("A", &["x"])
        .build()
        .unwrap_err();
    assert!(matches!(err, ValueError::DuplicateVariant { .. }));
}

#[test]
fn same_named_unions_compare_structurally() {
    let a = pair_union();
    let b = pair_union();
    let x = a.construct("Pair", vec![1.into(), 2.into()]).unwrap();
    let y = b.construct("Pair", vec![1.into(), 2.into()]).unwrap();
    assert_eq!(x, y);
}

#[test]
fn clones_share_heap() {
    let s = Value::string("shared");
    let t = s.clone();
    match (&s, &t) {
        (Value::Str(a), Value::Str(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected strings"),
    }
}

#[test]
fn union_lists_variant_names_in_order() {
    let list = UnionDef::list();
    let names: Vec<&str> = list.variant_names().collect();
    assert_eq!(names, vec!["Cons", "Nil"]);
    assert_eq!(UnionDef::either().variant("Right").map(VariantDef::arity), Some(1));
}

#[test]
fn long_lists_compare_and_drop_without_recursing() {
    let list = Value::list(0..200_000);
    let same = Value::list(0..200_000);
    let shorter = Value::list(0..199_999);
    assert!(list == same);
    assert!(list != shorter);

    let shared = list.clone();
    drop(list);
    assert!(shared == same);
    drop((shared, same, shorter));
}
