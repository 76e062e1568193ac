//! Rule and Scope types for text rewriting.

use std::fmt;

use regex::{Captures, Regex};
use tracing::trace;

use crate::options::Options;
use crate::{EasyMarkError, Result};

/// Type alias for replacement functions
pub type ReplacementFn = Box<dyn Fn(&Captures, &Options) -> String + Send + Sync>;

/// Where a rule's pattern may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Anchored to line boundaries (`^` and `$` match at every line)
    Line,
    /// Anywhere in the document, possibly spanning lines
    Text,
}

/// A rule rewrites every match of its pattern in a document
pub struct Rule {
    name: String,
    scope: Scope,
    pattern: Regex,
    replacement: ReplacementFn,
}

impl Rule {
    /// Create a rule from an already compiled pattern.
    ///
    /// The pattern is used as is: a `Scope::Line` rule is expected to carry
    /// the `(?m)` flag itself.
    pub fn new<F>(name: &str, scope: Scope, pattern: Regex, replacement: F) -> Self
    where
        F: Fn(&Captures, &Options) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            scope,
            pattern,
            replacement: Box::new(replacement),
        }
    }

    /// Compile a line-anchored rule. `^` and `$` match at line boundaries.
    pub fn line<F>(name: &str, pattern: &str, replacement: F) -> Result<Self>
    where
        F: Fn(&Captures, &Options) -> String + Send + Sync + 'static,
    {
        let pattern = compile(name, &format!("(?m){pattern}"))?;
        Ok(Self::new(name, Scope::Line, pattern, replacement))
    }

    /// Compile a rule that may match anywhere in the text
    pub fn text<F>(name: &str, pattern: &str, replacement: F) -> Result<Self>
    where
        F: Fn(&Captures, &Options) -> String + Send + Sync + 'static,
    {
        let pattern = compile(name, pattern)?;
        Ok(Self::new(name, Scope::Text, pattern, replacement))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Replace every non-overlapping match, left to right
    pub fn apply(&self, text: &str, options: &Options) -> String {
        let mut hits = 0usize;
        let result = self.pattern.replace_all(text, |caps: &Captures| {
            hits += 1;
            (self.replacement)(caps, options)
        });
        trace!(rule = %self.name, scope = ?self.scope, hits, "applied rewrite rule");
        result.into_owned()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| EasyMarkError::InvalidPattern {
        name: name.to_string(),
        source,
    })
}
