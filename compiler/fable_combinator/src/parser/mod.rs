//! The `Parser` value and its combinators.

use std::borrow::Cow;
use std::ops::BitOr;
use std::sync::Arc;

use tracing::trace;

use crate::failure::ParseFailure;
use crate::primitives::eof;

/// Outcome of running a parser at one position.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply<T> {
    /// Index after the attempt. Unchanged from the start index on failure.
    pub index: usize,
    /// The yielded value, or why the attempt failed.
    pub result: Result<T, ParseFailure>,
    /// The furthest failure seen along the way that did not stop the parse,
    /// e.g. the attempt that ended a `many`.
    pub context: Option<ParseFailure>,
}

impl<T> Reply<T> {
    pub fn ok(index: usize, value: T) -> Self {
        Reply {
            index,
            result: Ok(value),
            context: None,
        }
    }

    #[cold]
    pub fn err(index: usize, failure: ParseFailure) -> Self {
        Reply {
            index,
            result: Err(failure),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: Option<ParseFailure>) -> Self {
        self.context = ParseFailure::furthest(self.context, context);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub(crate) type ParseFn<T> = dyn Fn(&str, usize) -> Reply<T> + Send + Sync;

/// An immutable, shareable parser yielding `T`.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> Parser<T> {
    /// Run at `index` of `input`.
    #[inline]
    pub fn run(&self, input: &str, index: usize) -> Reply<T> {
        (self.run)(input, index)
    }

    pub(crate) fn from_arc(run: Arc<ParseFn<T>>) -> Self {
        Parser { run }
    }

    pub(crate) fn as_arc(&self) -> &Arc<ParseFn<T>> {
        &self.run
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&str, usize) -> Reply<T> + Send + Sync + 'static,
    {
        Parser { run: Arc::new(run) }
    }

    /// Sequence: run `self`, then the parser `f` builds from its value.
    ///
    /// `f` is never called when `self` fails.
    pub fn chain<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        Parser::new(move |input: &str, index| {
            let first = self.run(input, index);
            let context = first.context;
            match first.result {
                Ok(value) => {
                    let mut second = f(value).run(input, first.index);
                    if !second.is_ok() {
                        second.index = index;
                    }
                    second.with_context(context)
                }
                Err(failure) => Reply::err(index, failure).with_context(context),
            }
        })
    }

    /// Transform the yielded value. Failures pass through.
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Parser::new(move |input: &str, index| {
            let reply = self.run(input, index);
            Reply {
                index: reply.index,
                result: reply.result.map(&f),
                context: reply.context,
            }
        })
    }

    /// Run `following` after `self`, keeping only `self`'s value.
    ///
    /// `following` must still succeed.
    pub fn skip<U: 'static>(self, following: Parser<U>) -> Parser<T> {
        Parser::new(move |input: &str, index| {
            let first = self.run(input, index);
            let context = first.context;
            let value = match first.result {
                Ok(value) => value,
                Err(failure) => return Reply::err(index, failure).with_context(context),
            };
            let second = following.run(input, first.index);
            let context = ParseFailure::furthest(context, second.context);
            match second.result {
                Ok(_) => Reply::ok(second.index, value).with_context(context),
                Err(failure) => Reply::err(index, failure).with_context(context),
            }
        })
    }

    /// Ordered choice: try `self`, and from the same position `alternative`
    /// if `self` failed.
    ///
    /// The failed branch is kept as context, so a later error can point at
    /// the deepest place any branch reached.
    pub fn or_else(self, alternative: Parser<T>) -> Parser<T> {
        Parser::new(move |input: &str, index| {
            let first = self.run(input, index);
            match first.result {
                Ok(_) => first,
                Err(failure) => {
                    let context = ParseFailure::furthest(first.context, Some(failure));
                    alternative.run(input, index).with_context(context)
                }
            }
        })
    }

    /// Greedy repetition collecting every value. Never fails.
    ///
    /// When the attempt that ended the repetition failed with input still
    /// left, that failure is kept as context.
    pub fn many(self) -> Parser<Vec<T>> {
        Parser::new(move |input: &str, start| {
            let mut values = Vec::new();
            let mut index = start;
            let mut context = None;
            loop {
                let reply = self.run(input, index);
                context = ParseFailure::furthest(context, reply.context);
                match reply.result {
                    // A success that consumed nothing would repeat forever.
                    Ok(_) if reply.index == index => break,
                    Ok(value) => {
                        values.push(value);
                        index = reply.index;
                    }
                    Err(failure) => {
                        if !failure.at_end() {
                            context = ParseFailure::furthest(context, Some(failure));
                        }
                        break;
                    }
                }
            }
            Reply::ok(index, values).with_context(context)
        })
    }

    /// Replace the `expected` description of a failure.
    pub fn label(self, expected: impl Into<Cow<'static, str>>) -> Parser<T> {
        let expected = expected.into();
        Parser::new(move |input: &str, index| {
            let mut reply = self.run(input, index);
            if let Err(failure) = &mut reply.result {
                failure.expected = expected.clone();
            }
            reply
        })
    }

    /// Run over the whole of `input`: from index 0, then assert that no
    /// input is left.
    ///
    /// If trailing input remains and a repetition recorded a failure at or
    /// beyond that point, the recorded failure is reported: it names the
    /// token that actually stopped the parse.
    pub fn parse(&self, input: &str) -> Result<T, ParseFailure> {
        let reply = self.run(input, 0);
        let result = match reply.result {
            Ok(value) => {
                let end = eof().run(input, reply.index);
                match end.result {
                    Ok(()) => Ok(value),
                    Err(failure) => Err(match reply.context {
                        Some(context) if context.index >= failure.index => context,
                        _ => failure,
                    }),
                }
            }
            Err(failure) => Err(match reply.context {
                Some(context) if context.index > failure.index => context,
                _ => failure,
            }),
        };
        trace!(input, ok = result.is_ok(), "parse");
        result
    }
}

impl<T: 'static> Parser<Vec<T>> {
    /// Like [`chain`](Parser::chain), but the values of both parsers are
    /// concatenated instead of the first being handed off.
    pub fn also<F>(self, f: F) -> Parser<Vec<T>>
    where
        F: Fn(&[T]) -> Parser<Vec<T>> + Send + Sync + 'static,
    {
        Parser::new(move |input: &str, index| {
            let first = self.run(input, index);
            let context = first.context;
            let mut values = match first.result {
                Ok(values) => values,
                Err(failure) => return Reply::err(index, failure).with_context(context),
            };
            let second = f(&values).run(input, first.index);
            let context = ParseFailure::furthest(context, second.context);
            match second.result {
                Ok(more) => {
                    values.extend(more);
                    Reply::ok(second.index, values).with_context(context)
                }
                Err(failure) => Reply::err(index, failure).with_context(context),
            }
        })
    }
}

/// `a | b` is `a.or_else(b)`.
impl<T: 'static> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or_else(rhs)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
