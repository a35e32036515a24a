use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn block(head: &str, args: Vec<PatternToken>) -> PatternToken {
    PatternToken::block(head, args)
}

fn ident(name: &str) -> PatternToken {
    PatternToken::ident(name)
}

#[test]
fn leaves() {
    assert_eq!(tokenize("_").unwrap(), PatternToken::Wildcard);
    assert_eq!(tokenize("x").unwrap(), ident("x"));
    assert_eq!(tokenize("\"hi\"").unwrap(), PatternToken::Str("hi".into()));
    assert_eq!(tokenize("\"\"").unwrap(), PatternToken::Str(String::new()));
    assert_eq!(tokenize("42").unwrap(), PatternToken::Number(42.0));
    assert_eq!(tokenize("-1.5").unwrap(), PatternToken::Number(-1.5));
    assert_eq!(tokenize("+7").unwrap(), PatternToken::Number(7.0));
}

#[test]
fn underscore_prefixed_name_is_an_identifier() {
    assert_eq!(tokenize("_x").unwrap(), ident("_x"));
    assert_eq!(tokenize("__").unwrap(), ident("__"));
}

#[test]
fn dotted_and_dashed_identifiers() {
    let token = tokenize("Option.Some").unwrap();
    let PatternToken::Ident(path) = token else {
        panic!("expected an identifier, got {token:?}");
    };
    assert_eq!(path.segments(), &["Option", "Some"]);
    assert_eq!(tokenize("kebab-case").unwrap(), ident("kebab-case"));
}

#[test]
fn nested_blocks() {
    assert_eq!(
        tokenize("Cons(Some(a), _)").unwrap(),
        block("Cons", vec![block("Some", vec![ident("a")]), PatternToken::Wildcard])
    );
}

#[test]
fn block_arguments_of_every_kind() {
    assert_eq!(
        tokenize(r#"Row("id", 3, x, _, None)"#).unwrap(),
        block(
            "Row",
            vec![
                PatternToken::Str("id".into()),
                PatternToken::Number(3.0),
                ident("x"),
                PatternToken::Wildcard,
                ident("None"),
            ]
        )
    );
}

#[test]
fn empty_block() {
    assert_eq!(tokenize("Nil()").unwrap(), block("Nil", vec![]));
}

#[test]
fn separators_are_runs_of_commas_and_whitespace() {
    let expected = block("Pair", vec![ident("a"), ident("b")]);
    assert_eq!(tokenize("Pair(a,b)").unwrap(), expected);
    assert_eq!(tokenize("Pair( a ,\n b )").unwrap(), expected);
    assert_eq!(tokenize("Pair(a b)").unwrap(), expected);
    assert_eq!(tokenize("Pair(a,,b,)").unwrap(), expected);
    assert_eq!(tokenize("Pair(a, b, )").unwrap(), expected);
}

#[test]
fn adjacent_arguments_need_a_separator() {
    for pattern in ["Pair(1a)", "Pair(a\"b\")", "Pair(, a)"] {
        assert!(tokenize(pattern).is_err(), "{pattern:?} should not parse");
    }
    let failure = tokenize("Pair(1a)").unwrap_err();
    assert_eq!(failure.index, 6);
    assert_eq!(failure.unconsumed, "a)");
}

#[test]
fn surrounding_whitespace_is_allowed() {
    assert_eq!(tokenize("  Some(a)\t").unwrap(), block("Some", vec![ident("a")]));
}

#[test]
fn head_must_touch_its_parenthesis() {
    assert!(tokenize("Some (a)").is_err());
}

#[test]
fn unclosed_block_fails_at_end() {
    let failure = tokenize("Some(a").unwrap_err();
    assert!(failure.at_end());
}

#[test]
fn failure_points_at_offending_token() {
    let failure = tokenize("Cons(a, $)").unwrap_err();
    assert_eq!(failure.index, 8);
    assert_eq!(failure.unconsumed, "$)");
}

#[test]
fn malformed_patterns_fail() {
    for pattern in ["", "(", "Some(", "\"open", "1.", "a b", "Some(a))"] {
        assert!(tokenize(pattern).is_err(), "{pattern:?} should not parse");
    }
}

#[test]
fn deep_nesting() {
    let depth = 500;
    let pattern = format!("{}x{}", "S(".repeat(depth), ")".repeat(depth));
    assert_eq!(tokenize(&pattern).unwrap().depth(), depth + 1);
}

fn token_strategy() -> impl Strategy<Value = PatternToken> {
    let name = "[a-z][a-zA-Z0-9]{0,6}";
    let leaf = prop_oneof![
        Just(PatternToken::Wildcard),
        name.prop_map(|n| PatternToken::ident(&n)),
        "[a-zA-Z0-9 ,()]{0,8}".prop_map(PatternToken::Str),
        (-10_000i32..10_000).prop_map(|n| PatternToken::Number(f64::from(n) / 4.0)),
    ];
    leaf.prop_recursive(4, 32, 4, move |inner| {
        ("[A-Z][a-zA-Z]{0,6}", prop::collection::vec(inner, 0..4))
            .prop_map(|(head, args)| PatternToken::block(&head, args))
    })
}

proptest! {
    #[test]
    fn display_round_trips(token in token_strategy()) {
        prop_assert_eq!(tokenize(&token.to_string()).unwrap(), token);
    }
}
