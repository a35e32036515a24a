//! Primitive parsers and the recursion knot.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock, Weak};

use regex::Regex;

use crate::failure::ParseFailure;
use crate::parser::{ParseFn, Parser, Reply};

/// Match `pattern` anchored at the current index, yielding the matched text.
///
/// Fails without consuming when the regex does not match at that exact
/// position. An empty match is a success that consumes nothing.
pub fn regex(pattern: &str) -> Result<Parser<String>, regex::Error> {
    let anchored = Regex::new(&format!("^(?:{pattern})"))?;
    let expected: Cow<'static, str> = format!("/{pattern}/").into();
    Ok(Parser::new(move |input: &str, index| {
        let rest = input.get(index..).unwrap_or_default();
        match anchored.find(rest) {
            Some(found) => Reply::ok(index + found.end(), found.as_str().to_owned()),
            None => Reply::err(index, ParseFailure::new(input, index, expected.clone())),
        }
    }))
}

/// Match `literal` exactly at the current index, yielding it.
pub fn string(literal: &str) -> Parser<String> {
    let literal = literal.to_owned();
    let expected: Cow<'static, str> = format!("{literal:?}").into();
    Parser::new(move |input: &str, index| {
        let rest = input.get(index..).unwrap_or_default();
        if rest.starts_with(literal.as_str()) {
            Reply::ok(index + literal.len(), literal.clone())
        } else {
            Reply::err(index, ParseFailure::new(input, index, expected.clone()))
        }
    })
}

/// Succeed only when no input is left.
pub fn eof() -> Parser<()> {
    Parser::new(|input: &str, index| {
        if index >= input.len() {
            Reply::ok(index, ())
        } else {
            Reply::err(index, ParseFailure::new(input, index, "end of input"))
        }
    })
}

/// Yield `value` without consuming input.
pub fn succeed<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |_input: &str, index| Reply::ok(index, value.clone()))
}

/// Fail without consuming input.
pub fn fail<T: 'static>(expected: impl Into<Cow<'static, str>>) -> Parser<T> {
    let expected = expected.into();
    Parser::new(move |input: &str, index| {
        Reply::err(index, ParseFailure::new(input, index, expected.clone()))
    })
}

/// Build a self-referential parser.
///
/// `build` receives a handle that behaves like the finished parser and
/// returns the finished parser. The handle holds only a weak reference, so
/// the grammar does not keep itself alive; it fails if used after the
/// returned parser has been dropped.
pub fn recursive<T, F>(build: F) -> Parser<T>
where
    T: 'static,
    F: FnOnce(Parser<T>) -> Parser<T>,
{
    let cell: Arc<OnceLock<Weak<ParseFn<T>>>> = Arc::new(OnceLock::new());
    let handle = {
        let cell = Arc::clone(&cell);
        Parser::new(move |input: &str, index| {
            match cell.get().and_then(Weak::upgrade) {
                Some(run) => Parser::from_arc(run).run(input, index),
                None => Reply::err(
                    index,
                    ParseFailure::new(input, index, "a grammar that is still alive"),
                ),
            }
        })
    };
    let parser = build(handle);
    // `cell` is fresh, so the first set always lands.
    let _ = cell.set(Arc::downgrade(parser.as_arc()));
    parser
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
