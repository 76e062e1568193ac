//! Rule system for EasyMark conversion.

mod html;
mod markdown;
mod reverse;
mod rule;

pub use html::html_rules;
pub use markdown::markdown_rules;
pub use reverse::reverse_rules;
pub use rule::{ReplacementFn, Rule, Scope};

use indexmap::IndexMap;

use crate::options::Options;

/// Ordered collection of rules, applied as a left fold in insertion order
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create an empty rule list
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Append a rule. A rule with the same name is replaced in place.
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.insert(rule.name().to_string(), rule);
        self
    }

    /// Insert a rule directly before `existing`.
    ///
    /// Returns false, leaving the list unchanged, if no rule is named `existing`.
    pub fn insert_before(&mut self, existing: &str, rule: Rule) -> bool {
        let Some(index) = self.rules.get_index_of(existing) else {
            return false;
        };
        self.rules.shift_insert(index, rule.name().to_string(), rule);
        true
    }

    /// Remove a rule by name, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Rule> {
        self.rules.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Rule names in application order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Thread the text through every rule in order
    pub fn apply(&self, text: &str, options: &Options) -> String {
        self.rules
            .values()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc, options))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut rules = Rules::new();
        for rule in iter {
            rules.push(rule);
        }
        rules
    }
}
