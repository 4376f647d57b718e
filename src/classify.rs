//! Pattern-based association of price labels with declared services.
//!
//! Matching rules are authored as data (regex strings) in the catalog
//! document. Compilation is fallible but never fatal: a malformed pattern
//! degrades to a rule that matches nothing, so one bad service definition
//! cannot take down the whole load.

use regex::RegexBuilder;

use crate::model::ServiceDefinition;

/// A compiled label-matching rule.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Case-insensitive compiled pattern.
    Pattern(regex::Regex),
    /// Matches nothing. Produced for empty or malformed pattern strings and
    /// used by the fallback service.
    Never,
}

impl MatchRule {
    /// Compiles a pattern string with case-insensitive semantics.
    ///
    /// Empty patterns and compile failures yield [`MatchRule::Never`]; the
    /// failure is logged, never raised.
    pub fn compile(pattern: &str) -> Self {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Self::Never;
        }
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => Self::Pattern(re),
            Err(err) => {
                tracing::warn!(
                    "invalid service pattern {pattern:?}, treating as never-matching: {err}"
                );
                Self::Never
            }
        }
    }

    pub fn is_match(&self, label: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(label),
            Self::Never => false,
        }
    }

    /// Removes the first occurrence of the rule from `label`. [`Self::Never`]
    /// leaves the label unchanged.
    pub fn strip_first(&self, label: &str) -> String {
        match self {
            Self::Pattern(re) => re.replacen(label, 1, "").into_owned(),
            Self::Never => label.to_string(),
        }
    }
}

/// Returns the first service whose rule matches `label`, scanning in
/// declaration order. Declaration order is the priority order: overlapping
/// patterns are disambiguated by whichever service was declared first.
///
/// `None` means no rule matched; the caller substitutes
/// [`ServiceDefinition::fallback`].
pub fn classify<'a>(
    label: &str,
    services: &'a [ServiceDefinition],
) -> Option<&'a ServiceDefinition> {
    services.iter().find(|s| s.rule.is_match(label))
}
