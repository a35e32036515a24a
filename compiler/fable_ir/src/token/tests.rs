use super::*;
use pretty_assertions::assert_eq;

#[test]
fn ident_path_splits_on_dots() {
    let path = IdentPath::parse("Data.Option.Some");
    assert_eq!(path.segments(), &["Data", "Option", "Some"]);
    assert_eq!(path.last(), "Some");
    assert_eq!(path.qualifier().as_deref(), Some("Data.Option"));
    assert!(!path.is_simple());
}

#[test]
fn simple_path_has_no_qualifier() {
    let path = IdentPath::parse("none-yet");
    assert!(path.is_simple());
    assert_eq!(path.qualifier(), None);
    assert_eq!(path.as_dotted(), "none-yet");
}

#[test]
fn display_renders_nested_block() {
    let token = PatternToken::block(
        "Cons",
        vec![
            PatternToken::block("Some", vec![PatternToken::ident("a")]),
            PatternToken::Wildcard,
        ],
    );
    assert_eq!(token.to_string(), "Cons(Some(a), _)");
}

#[test]
fn display_renders_literals() {
    let token = PatternToken::block(
        "Pair",
        vec![
            PatternToken::Str(String::new()),
            PatternToken::Number(-2.5),
            PatternToken::Number(42.0),
        ],
    );
    assert_eq!(token.to_string(), "Pair(\"\", -2.5, 42)");
}

#[test]
fn empty_block_keeps_parens() {
    let token = PatternToken::block("Nil", vec![]);
    assert_eq!(token.to_string(), "Nil()");
    assert_eq!(token.depth(), 1);
}

#[test]
fn depth_counts_deepest_branch() {
    let token = PatternToken::block(
        "Cons",
        vec![
            PatternToken::ident("x"),
            PatternToken::block(
                "Cons",
                vec![PatternToken::block("Some", vec![PatternToken::Wildcard])],
            ),
        ],
    );
    assert_eq!(token.depth(), 4);
    assert!(PatternToken::Wildcard.args().is_empty());
}
