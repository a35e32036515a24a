//! Ordered case dispatch.
//!
//! A [`Dispatcher`] holds `(pattern, handler)` cases in the order they were
//! added. Applying it to a value tries each case in turn; the first pattern
//! that matches has its handler called with the bindings, and no later case
//! is tried. When nothing matches, the case whose raw pattern text equals
//! the configured default pattern (`_` unless changed) is called with no
//! bindings. With no such case the result is [`MatchError::NoDefaultCase`].
//!
//! A pattern that does not parse never matches. It is skipped like any
//! other mismatch, with a warning logged the first time it is compiled.

use std::fmt;

use fable_ir::TaggedValue;
use tracing::trace;

use crate::compile::CompileCache;
use crate::extract::{extract, Bindings, Mismatch};

/// Pattern text used for the fallback case.
pub const DEFAULT_PATTERN: &str = "_";

/// Boxed case handler. Receives the bindings of the pattern that matched.
pub type Handler<V, R> = Box<dyn for<'a> Fn(&Bindings<'a, V>) -> R + Send + Sync>;

/// Raised when no case matched and no default case exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("no default case found")]
    NoDefaultCase,
}

/// Dispatcher configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Raw pattern text identifying the fallback case.
    pub default_pattern: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_pattern: DEFAULT_PATTERN.to_owned(),
        }
    }
}

impl DispatchConfig {
    /// Create a config whose fallback case is the one written `pattern`.
    pub fn with_default_pattern(pattern: impl Into<String>) -> Self {
        Self {
            default_pattern: pattern.into(),
        }
    }
}

/// One pattern string and its handler.
pub struct Case<V, R> {
    pattern: String,
    handler: Handler<V, R>,
}

impl<V, R> Case<V, R> {
    pub fn new<F>(pattern: impl Into<String>, handler: F) -> Self
    where
        F: for<'a> Fn(&Bindings<'a, V>) -> R + Send + Sync + 'static,
    {
        Case {
            pattern: pattern.into(),
            handler: Box::new(handler),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<V, R> fmt::Debug for Case<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Outcome of one case for one value, as reported by [`Dispatcher::explain`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    pub pattern: String,
    /// Binder names on a match, or why the case was skipped.
    pub outcome: Result<Vec<String>, Mismatch>,
}

impl CaseReport {
    pub fn matched(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Ordered cases with a per-instance compile cache.
///
/// Each pattern string is compiled on first use and reused afterwards.
/// Applying is read-only apart from that cache, so one dispatcher can be
/// shared across threads.
pub struct Dispatcher<V, R> {
    cases: Vec<Case<V, R>>,
    cache: CompileCache,
    config: DispatchConfig,
}

impl<V, R> Default for Dispatcher<V, R> {
    fn default() -> Self {
        Self::with_config(DispatchConfig::default())
    }
}

impl<V, R> Dispatcher<V, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        Dispatcher {
            cases: Vec::new(),
            cache: CompileCache::new(),
            config,
        }
    }

    pub fn from_cases(cases: Vec<Case<V, R>>) -> Self {
        Dispatcher {
            cases,
            ..Self::default()
        }
    }

    /// Append a case after the existing ones.
    #[must_use]
    pub fn case<F>(mut self, pattern: impl Into<String>, handler: F) -> Self
    where
        F: for<'a> Fn(&Bindings<'a, V>) -> R + Send + Sync + 'static,
    {
        self.cases.push(Case::new(pattern, handler));
        self
    }

    /// Cases in trial order.
    pub fn cases(&self) -> &[Case<V, R>] {
        &self.cases
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// The patterns compiled so far.
    pub fn cache(&self) -> &CompileCache {
        &self.cache
    }

    fn default_case(&self) -> Option<&Case<V, R>> {
        self.cases
            .iter()
            .find(|case| case.pattern == self.config.default_pattern)
    }
}

impl<V: TaggedValue, R> Dispatcher<V, R> {
    /// Call the handler of the first case matching `value`.
    pub fn apply(&self, value: &V) -> Result<R, MatchError> {
        let variant = value.variant_name().unwrap_or("<none>");
        for (position, case) in self.cases.iter().enumerate() {
            let Some(pattern) = self.cache.compile(&case.pattern) else {
                trace!(position, pattern = case.pattern.as_str(), "case does not parse");
                continue;
            };
            let attempt = extract(&pattern, value);
            match attempt {
                Ok(bindings) => {
                    trace!(position, pattern = case.pattern.as_str(), variant, "case matched");
                    return Ok((case.handler)(&bindings));
                }
                Err(reason) => {
                    trace!(
                        position,
                        pattern = case.pattern.as_str(),
                        variant,
                        %reason,
                        "case skipped"
                    );
                }
            }
        }

        match self.default_case() {
            Some(case) => {
                trace!(pattern = case.pattern.as_str(), variant, "default case");
                Ok((case.handler)(&Bindings::default()))
            }
            None => Err(MatchError::NoDefaultCase),
        }
    }

    /// Report, per case in trial order, whether it would match `value`.
    ///
    /// Every case is tried and no handler is called.
    pub fn explain(&self, value: &V) -> Vec<CaseReport> {
        self.cases
            .iter()
            .map(|case| {
                let outcome = match self.cache.compile(&case.pattern) {
                    Some(pattern) => extract(&pattern, value)
                        .map(|bindings| bindings.names().map(str::to_owned).collect()),
                    None => Err(Mismatch::invalid_pattern(&case.pattern)),
                };
                CaseReport {
                    pattern: case.pattern.clone(),
                    outcome,
                }
            })
            .collect()
    }
}

impl<V, R> fmt::Debug for Dispatcher<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("cases", &self.cases)
            .field("config", &self.config)
            .field("compiled", &self.cache.len())
            .finish()
    }
}

/// Build a matching function from ordered cases.
///
/// The returned function owns its dispatcher, and with it the compile cache.
/// `default_pattern` names the fallback case, normally `"_"`.
pub fn compile_patterns<V, R>(
    cases: Vec<Case<V, R>>,
    default_pattern: &str,
) -> impl Fn(&V) -> Result<R, MatchError> + Send + Sync
where
    V: TaggedValue,
{
    let config = DispatchConfig::with_default_pattern(default_pattern);
    let mut dispatcher = Dispatcher::with_config(config);
    dispatcher.cases = cases;
    move |value: &V| dispatcher.apply(value)
}

/// Build a [`Dispatcher`] from `"pattern" => handler` arms, tried in order.
///
/// ```
/// use fable_match::{cases, Dispatcher, Value};
///
/// let describe: Dispatcher<Value, String> = cases! {
///     "Some(x)" => |b| format!("some {}", b[0]),
///     "_" => |_| "nothing".to_owned(),
/// };
/// assert_eq!(describe.apply(&Value::some(1)).unwrap(), "some 1");
/// assert_eq!(describe.apply(&Value::none()).unwrap(), "nothing");
/// ```
#[macro_export]
macro_rules! cases {
    ($($pattern:expr => $handler:expr),+ $(,)?) => {
        $crate::Dispatcher::from_cases(vec![$($crate::Case::new($pattern, $handler)),+])
    };
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
