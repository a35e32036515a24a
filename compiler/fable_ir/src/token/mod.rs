//! Pattern token tree.
//!
//! A pattern string such as `Cons(Some(a), _)` compiles to one
//! `PatternToken`. Only [`PatternToken::Block`] carries nested tokens; every
//! other kind is a leaf.

use std::fmt;

/// A dotted identifier path (`Foo.Bar` → `["Foo", "Bar"]`).
///
/// Identifiers may contain `.` and `-`, so a variant imported under a
/// qualified name (`Option.Some`) is still a single identifier token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentPath(Vec<String>);

impl IdentPath {
    /// Split a dotted identifier into its segments.
    pub fn parse(dotted: &str) -> Self {
        IdentPath(dotted.split('.').map(str::to_owned).collect())
    }

    /// All segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment: the name being referred to.
    pub fn last(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    /// Every segment before the last one, or `None` for an unqualified name.
    pub fn qualifier(&self) -> Option<String> {
        match self.0.split_last() {
            Some((_, init)) if !init.is_empty() => Some(init.join(".")),
            _ => None,
        }
    }

    /// Whether this path is a single segment.
    pub fn is_simple(&self) -> bool {
        self.0.len() == 1
    }

    /// The path re-joined with dots, as written in the pattern.
    pub fn as_dotted(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for IdentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// One node of a compiled pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternToken {
    /// Quoted string literal, without the quotes.
    Str(String),
    /// Numeric literal.
    Number(f64),
    /// Bare identifier: a binder, or a tag match when it names a sibling
    /// variant of the value it meets.
    Ident(IdentPath),
    /// The `_` placeholder. Matches anything and binds nothing.
    Wildcard,
    /// Constructor application, `head(args...)`.
    Block {
        head: IdentPath,
        args: Vec<PatternToken>,
    },
}

impl PatternToken {
    /// Build a block token.
    pub fn block(head: &str, args: Vec<PatternToken>) -> Self {
        PatternToken::Block {
            head: IdentPath::parse(head),
            args,
        }
    }

    /// Build an identifier token.
    pub fn ident(name: &str) -> Self {
        PatternToken::Ident(IdentPath::parse(name))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PatternToken::Wildcard)
    }

    /// Nested sub-patterns. Empty for every kind except `Block`.
    pub fn args(&self) -> &[PatternToken] {
        match self {
            PatternToken::Block { args, .. } => args,
            _ => &[],
        }
    }

    /// Nesting depth: 1 for leaves, 1 + deepest argument for blocks.
    pub fn depth(&self) -> usize {
        1 + self.args().iter().map(PatternToken::depth).max().unwrap_or(0)
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternToken::Str(s) => write!(f, "\"{s}\""),
            PatternToken::Number(n) => write!(f, "{n}"),
            PatternToken::Ident(path) => write!(f, "{path}"),
            PatternToken::Wildcard => f.write_str("_"),
            PatternToken::Block { head, args } => {
                write!(f, "{head}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests;
