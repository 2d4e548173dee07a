//! Shared utility functions for brokkr crates

/// Format a list of allowed keys as a sorted, backticked, comma-separated
/// string
///
/// Used by the documentation generator when rendering the accepted values of
/// an attribute.
pub fn comma_separated_keys<S: AsRef<str>>(keys: &[S]) -> String {
    let mut quoted: Vec<String> = keys.iter().map(|k| format!("`{}`", k.as_ref())).collect();
    quoted.sort();
    quoted.join(", ")
}
