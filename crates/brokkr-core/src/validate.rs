//! Field validators for resource schemas
//!
//! Each validator inspects one raw value handed over by the schema-validation
//! framework and returns the problems found as [`Diagnostics`]. Values arrive
//! as `serde_json::Value` because the framework decodes user input before any
//! typing is applied; a mistyped value is reported, never asserted.
//!
//! Validators stop at the first structural failure that makes further checks
//! meaningless (a type mismatch, or whitespace where the remaining checks
//! assume a token), and otherwise accumulate independent violations.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::utils::comma_separated_keys;

/// Maximum length of a resource name, in bytes
pub const MAX_NAME_LENGTH: usize = 63;

/// CNI plugins the platform can install
pub const SUPPORTED_CNI_PLUGINS: &[&str] = &["flannel", "cilium"];

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("whitespace regex is valid"));

static NAME_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-_.]+$").expect("name charset regex is valid"));

/// Check that a value is a whitespace-free string
pub fn validate_name(value: &Value, field: &str) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let Some(name) = expect_string(value, field, &mut diags) else {
        return diags;
    };

    reject_whitespace(name, field, &mut diags);
    diags
}

/// Check that a value names a supported CNI plugin
pub fn validate_cluster_cni(value: &Value, field: &str) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let Some(cni) = expect_string(value, field, &mut diags) else {
        return diags;
    };

    if reject_whitespace(cni, field, &mut diags) {
        return diags;
    }

    if !SUPPORTED_CNI_PLUGINS.contains(&cni) {
        diags.error(
            field,
            "unsupported CNI plugin",
            format!(
                "{field} must be one of {}, got {cni:?}",
                comma_separated_keys(SUPPORTED_CNI_PLUGINS)
            ),
        );
    }

    diags
}

/// Check that a value is a whitespace-free string within the name length limit
pub fn validate_name_size(value: &Value, field: &str) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let Some(name) = expect_string(value, field, &mut diags) else {
        return diags;
    };

    if reject_whitespace(name, field, &mut diags) {
        return diags;
    }

    if name.len() > MAX_NAME_LENGTH {
        diags.error(
            field,
            "name too long",
            format!(
                "{field} must be at most {MAX_NAME_LENGTH} characters, got {}",
                name.len()
            ),
        );
    }

    diags
}

/// Check that a value is a string built only from alphanumeric characters,
/// hyphens, underscores and dots
///
/// Unlike the other name validators, the whitespace and character-set checks
/// both run: a name can violate either or both.
pub fn validate_name_characters(value: &Value, field: &str) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let Some(name) = expect_string(value, field, &mut diags) else {
        return diags;
    };

    reject_whitespace(name, field, &mut diags);

    if !NAME_CHARSET_RE.is_match(name) {
        diags.error(
            field,
            "disallowed characters",
            format!(
                "{field} may only contain alphanumeric characters, hyphens, underscores and dots, got {name:?}"
            ),
        );
    }

    diags
}

/// Report a type mismatch unless the value is a string
fn expect_string<'v>(value: &'v Value, field: &str, diags: &mut Diagnostics) -> Option<&'v str> {
    match value.as_str() {
        Some(s) => Some(s),
        None => {
            diags.error(
                field,
                "wrong value type",
                format!("expected {field} to be a string"),
            );
            None
        }
    }
}

/// Report whitespace in a value; returns true when the check failed
fn reject_whitespace(name: &str, field: &str, diags: &mut Diagnostics) -> bool {
    if WHITESPACE_RE.is_match(name) {
        diags.error(
            field,
            "cannot contain whitespace",
            format!("{field} cannot contain whitespace, got {name:?}"),
        );
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Validator = fn(&Value, &str) -> Diagnostics;

    const ALL_VALIDATORS: &[Validator] = &[
        validate_name,
        validate_cluster_cni,
        validate_name_size,
        validate_name_characters,
    ];

    #[test]
    fn non_string_values_yield_one_type_error() {
        for validator in ALL_VALIDATORS {
            for value in [json!(42), json!(true), json!(null), json!(["a"])] {
                let diags = validator(&value, "name");
                assert_eq!(diags.errors().count(), 1, "value: {value}");
                assert_eq!(diags.warnings().count(), 0, "value: {value}");
                assert_eq!(diags.iter().next().unwrap().summary, "wrong value type");
            }
        }
    }

    #[test]
    fn whitespace_fails_every_validator() {
        for validator in ALL_VALIDATORS {
            for value in ["a b", "tab\tseparated", "trailing\n"] {
                let diags = validator(&json!(value), "name");
                assert!(
                    diags
                        .errors()
                        .any(|d| d.summary == "cannot contain whitespace"),
                    "value: {value:?}"
                );
            }
        }
    }

    #[test]
    fn clean_name_passes() {
        assert!(validate_name(&json!("web-cluster"), "name").is_empty());
    }

    #[test]
    fn supported_cni_plugins_pass() {
        assert!(validate_cluster_cni(&json!("flannel"), "cni").is_empty());
        assert!(validate_cluster_cni(&json!("cilium"), "cni").is_empty());
    }

    #[test]
    fn unsupported_cni_plugin_is_rejected() {
        let diags = validate_cluster_cni(&json!("calico"), "cni");
        assert_eq!(diags.errors().count(), 1);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "unsupported CNI plugin");
        assert!(diag.detail.contains("`cilium`, `flannel`"));
    }

    #[test]
    fn name_length_boundary() {
        let at_limit = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_name_size(&json!(at_limit), "name").is_empty());

        let over_limit = "a".repeat(MAX_NAME_LENGTH + 1);
        let diags = validate_name_size(&json!(over_limit), "name");
        assert_eq!(diags.errors().count(), 1);
        assert_eq!(diags.iter().next().unwrap().summary, "name too long");
    }

    #[test]
    fn charset_violations_accumulate_with_whitespace() {
        // Space and bang: both checks fire
        let diags = validate_name_characters(&json!("bad name!"), "name");
        assert_eq!(diags.errors().count(), 2);

        // Bang only: just the character-set check fires
        let diags = validate_name_characters(&json!("bad!name"), "name");
        assert_eq!(diags.errors().count(), 1);
        assert_eq!(diags.iter().next().unwrap().summary, "disallowed characters");
    }

    #[test]
    fn full_charset_passes() {
        assert!(validate_name_characters(&json!("web-node_1.prod"), "name").is_empty());
    }
}
