//! Structured validation diagnostics
//!
//! Validators return a [`Diagnostics`] collection — ordered warnings and
//! errors that the calling schema-validation framework renders as plan-time
//! output. Problems are always reported as data, never as panics or early
//! process exits.

use std::fmt;
use std::slice;

/// Severity of a single diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Surfaced to the user but does not fail the plan
    Warning,

    /// Fails the plan
    Error,
}

/// A single validation finding for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Whether this finding is fatal for the plan
    pub severity: Severity,

    /// The field the finding applies to
    pub field: String,

    /// Short label for list output
    pub summary: String,

    /// Full human-readable description
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.summary, self.detail)
    }
}

/// Ordered collection of diagnostics for one validated value
///
/// Order of insertion is preserved and nothing is deduplicated; the framework
/// decides how to render repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error-severity diagnostic
    pub fn error(
        &mut self,
        field: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            field: field.into(),
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    /// Append a warning-severity diagnostic
    pub fn warning(
        &mut self,
        field: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            field: field.into(),
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    /// Append an already-built diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Append every diagnostic from another collection, preserving order
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Whether any error-severity diagnostic is present
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Iterate over error-severity diagnostics
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Iterate over warning-severity diagnostics
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Iterate over every diagnostic in insertion order
    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Number of diagnostics collected
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut diags = Diagnostics::new();
        diags.warning("name", "first", "a warning");
        diags.error("name", "second", "an error");
        diags.error("name", "third", "another error");

        let summaries: Vec<&str> = diags.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, vec!["first", "second", "third"]);
    }

    #[test]
    fn severity_filters() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.warning("cni", "heads up", "something soft");
        assert!(!diags.has_errors());
        assert_eq!(diags.warnings().count(), 1);

        diags.error("cni", "bad value", "something hard");
        assert!(diags.has_errors());
        assert_eq!(diags.errors().count(), 1);
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn extend_keeps_both_collections() {
        let mut first = Diagnostics::new();
        first.error("name", "one", "detail");

        let mut second = Diagnostics::new();
        second.error("name", "two", "detail");

        first.extend(second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn display_names_the_field() {
        let mut diags = Diagnostics::new();
        diags.error("cluster-name", "cannot contain whitespace", "got \"a b\"");

        let rendered = diags.iter().next().unwrap().to_string();
        assert!(rendered.starts_with("cluster-name:"));
        assert!(rendered.contains("cannot contain whitespace"));
    }
}
