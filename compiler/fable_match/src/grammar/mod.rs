//! The pattern grammar.
//!
//! ```text
//! pattern  := block | wildcard | string | number | ident
//! block    := ident "(" \s* (pattern (sep pattern)*)? [\s,]* ")"
//! sep      := [\s,]+
//! wildcard := "_"
//! string   := '"' [^"]* '"'
//! number   := [+-]? [0-9]+ ("." [0-9]+)?
//! ident    := [a-zA-Z_][a-zA-Z0-9_.-]*
//! ```
//!
//! Alternatives are tried in that order. `block` comes first so that the
//! head of a constructor application is not taken for a bare identifier,
//! and `wildcard` precedes `ident` because `_` is also a valid identifier.
//! The grammar is built once and shared by every caller.

use std::sync::LazyLock;

use fable_combinator::{
    fail, recursive, regex, string, succeed, ParseFailure, Parser, RegexError,
};
use fable_ir::{IdentPath, PatternToken};
use fable_stack::ensure_sufficient_stack;

const IDENT: &str = "[a-zA-Z_][a-zA-Z0-9_.-]*";
const NUMBER: &str = r"[+-]?[0-9]+(?:\.[0-9]+)?";
const STRING_BODY: &str = r#"[^"]*"#;
const SEPARATOR: &str = r"[\s,]+";
const TRAILER: &str = r"[\s,]*";
const WHITESPACE: &str = r"\s*";

#[expect(
    clippy::expect_used,
    reason = "grammar regexes are constants; a failure is a bug caught by any test"
)]
static GRAMMAR: LazyLock<Parser<PatternToken>> =
    LazyLock::new(|| build().expect("pattern grammar regexes are valid"));

/// Parse a whole pattern string into its token tree.
///
/// Surrounding whitespace is allowed. On failure the returned
/// [`ParseFailure`] points at the token that stopped the parse.
pub fn tokenize(pattern: &str) -> Result<PatternToken, ParseFailure> {
    GRAMMAR.parse(pattern)
}

fn build() -> Result<Parser<PatternToken>, RegexError> {
    let ident = regex(IDENT)?;
    let separator = regex(SEPARATOR)?;
    let trailer = regex(TRAILER)?;
    let whitespace = regex(WHITESPACE)?;

    let wildcard = ident.clone().chain(|name| {
        if name == "_" {
            succeed(PatternToken::Wildcard)
        } else {
            fail("`_`")
        }
    });

    let body = regex(STRING_BODY)?;
    let quoted = string("\"")
        .chain(move |_| body.clone())
        .skip(string("\""))
        .map(PatternToken::Str)
        .label("a quoted string");

    let number = regex(NUMBER)?.chain(|text| match text.parse::<f64>() {
        Ok(n) => succeed(PatternToken::Number(n)),
        Err(_) => fail("a number"),
    });

    let identifier = ident
        .clone()
        .map(|name| PatternToken::Ident(IdentPath::parse(&name)));

    let opening = whitespace.clone();
    let pattern = recursive(move |pattern| {
        let nested = Parser::new(move |input: &str, index| {
            ensure_sufficient_stack(|| pattern.run(input, index))
        });
        let following = {
            let nested = nested.clone();
            separator.chain(move |_| nested.clone()).many()
        };
        let args = nested.map(|token| vec![token]).also(move |_| following.clone())
            | succeed(Vec::new());
        let close = string(")");
        let block = ident
            .skip(string("("))
            .skip(opening)
            .chain(move |head| {
                let head = IdentPath::parse(&head);
                args.clone()
                    .skip(trailer.clone())
                    .skip(close.clone())
                    .map(move |args| PatternToken::Block {
                        head: head.clone(),
                        args,
                    })
            });
        block | wildcard | quoted | number | identifier
    });

    let trailing = whitespace.clone();
    Ok(whitespace
        .chain(move |_| pattern.clone())
        .skip(trailing))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
