//! Filter directives and layered `FilterSet` resolution.
//!
//! A filter spec is a comma separated list of `+prefix`/`-prefix` tokens; a
//! directive flips every category whose name starts with its prefix. Layers
//! (defaults, config file, CLI flag, inline pragma) are folded in order, so
//! later, more specific sources win.

use indexmap::IndexMap;
use thiserror::Error;

use crate::rules::Category;

/// One enable/disable request against a category-name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub enabled: bool,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("Filter should start with - or +")]
    MissingSign,
    #[error("Filter not allowed: {0}")]
    UnknownCategory(String),
}

/// Parse a comma separated filter spec into directives.
///
/// Empty entries are skipped. A directive must carry a `+`/`-` sign and its
/// remainder must be a prefix of at least one known category name.
///
/// # Errors
/// Returns an error describing the first invalid directive.
pub fn parse_directives(spec: &str) -> Result<Vec<Directive>, FilterParseError> {
    let mut directives = Vec::new();
    for raw in spec.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let (enabled, prefix) = if let Some(rest) = token.strip_prefix('+') {
            (true, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (false, rest)
        } else {
            return Err(FilterParseError::MissingSign);
        };
        if !Category::ALL
            .iter()
            .any(|category| category.as_str().starts_with(prefix))
        {
            return Err(FilterParseError::UnknownCategory(token.to_string()));
        }
        directives.push(Directive {
            enabled,
            prefix: prefix.to_string(),
        });
    }
    Ok(directives)
}

/// The frozen enabled/disabled state of every check category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    categories: IndexMap<Category, bool>,
}

impl FilterSet {
    /// The built-in default: every category enabled.
    #[must_use]
    pub fn all_enabled() -> Self {
        Self {
            categories: Category::ALL.iter().map(|&c| (c, true)).collect(),
        }
    }

    /// Fold override layers, in increasing precedence, over the defaults.
    #[must_use]
    pub fn resolve(layers: &[Vec<Directive>]) -> Self {
        let mut set = Self::all_enabled();
        for layer in layers {
            for directive in layer {
                set.apply(directive);
            }
        }
        set
    }

    fn apply(&mut self, directive: &Directive) {
        for (category, enabled) in &mut self.categories {
            if category.as_str().starts_with(directive.prefix.as_str()) {
                *enabled = directive.enabled;
            }
        }
    }

    #[must_use]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.categories.get(&category).copied().unwrap_or(true)
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::all_enabled()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
