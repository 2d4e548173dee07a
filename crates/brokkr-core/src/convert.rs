//! Size and id coercions shared by resource implementations

use crate::error::{Error, Result};

/// Parse a size string such as `10G` into its numeric value
///
/// Only the first `G` is stripped; the remainder must be a decimal integer.
pub fn parse_size(s: &str) -> Result<i64> {
    let stripped = s.replacen('G', "", 1);
    stripped
        .parse::<i64>()
        .map_err(|source| Error::invalid_size(s, source))
}

/// Split a composite resource id of the form `attribute1:attribute2`
///
/// Both halves must be non-empty; only the first `:` separates, so the second
/// half may itself contain colons.
pub fn split_composite_id(id: &str) -> Result<(String, String)> {
    match id.split_once(':') {
        Some((first, second)) if !first.is_empty() && !second.is_empty() => {
            Ok((first.to_string(), second.to_string()))
        }
        _ => Err(Error::invalid_resource_id(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gigabyte_suffix() {
        assert_eq!(parse_size("10G").unwrap(), 10);
        assert_eq!(parse_size("512").unwrap(), 512);
    }

    #[test]
    fn rejects_non_numeric_sizes() {
        let err = parse_size("abc").unwrap_err();
        assert!(matches!(err, Error::InvalidSize { .. }));
        assert!(err.to_string().contains("abc"));

        assert!(parse_size("").is_err());
    }

    #[test]
    fn splits_two_part_ids() {
        let (cluster, pool) = split_composite_id("cluster-9f2:pool-a41").unwrap();
        assert_eq!(cluster, "cluster-9f2");
        assert_eq!(pool, "pool-a41");
    }

    #[test]
    fn second_half_keeps_extra_colons() {
        let (first, second) = split_composite_id("a:b:c").unwrap();
        assert_eq!(first, "a");
        assert_eq!(second, "b:c");
    }

    #[test]
    fn rejects_malformed_ids() {
        for id in ["no-delimiter", ":pool", "cluster:", ""] {
            let err = split_composite_id(id).unwrap_err();
            assert!(matches!(err, Error::InvalidResourceId { .. }), "id: {id:?}");
        }
    }
}
