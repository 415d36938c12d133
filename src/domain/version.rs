//! Semantic version adapter over the `semver` crate

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{CiVersionError, Result};

/// Parse the base version declared in the manifest
pub fn parse_base(version: &str) -> Result<Version> {
    Version::parse(version)
        .map_err(|e| CiVersionError::version(format!("Invalid version '{}': {}", version, e)))
}

/// Replace prerelease identifiers and drop build metadata
pub fn with_prerelease(base: &Version, identifiers: &[&str]) -> Result<Version> {
    let joined = identifiers.join(".");
    let prerelease = Prerelease::new(&joined).map_err(|e| {
        CiVersionError::version(format!("Invalid prerelease '{}': {}", joined, e))
    })?;
    Ok(Version {
        pre: prerelease,
        build: BuildMetadata::EMPTY,
        ..base.clone()
    })
}

/// Check whether a string is a valid semantic version
pub fn is_valid(version: &str) -> bool {
    Version::parse(version).is_ok()
}

/// Ordered prerelease identifiers of a valid version, empty for releases
pub fn prerelease_identifiers(version: &str) -> Option<Vec<String>> {
    let parsed = Version::parse(version).ok()?;
    if parsed.pre.is_empty() {
        return Some(Vec::new());
    }
    Some(parsed.pre.as_str().split('.').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base() {
        let v = parse_base("1.2.3-foo").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
    }

    #[test]
    fn test_parse_base_invalid() {
        let err = parse_base("not-a-version").unwrap_err();
        assert!(matches!(err, CiVersionError::Version(_)));
        assert!(parse_base("v1.2.3").is_err());
    }

    #[test]
    fn test_with_prerelease_replaces_existing() {
        let base = parse_base("1.2.3-foo.1+build.5").unwrap();
        let v = with_prerelease(&base, &["local"]).unwrap();
        assert_eq!(v.to_string(), "1.2.3-local");
    }

    #[test]
    fn test_with_prerelease_multiple() {
        let base = parse_base("1.0.0").unwrap();
        let v = with_prerelease(&base, &["feature.x", "34"]).unwrap();
        assert_eq!(v.to_string(), "1.0.0-feature.x.34");
    }

    #[test]
    fn test_with_prerelease_rejects_illegal() {
        let base = parse_base("1.0.0").unwrap();
        assert!(with_prerelease(&base, &["a#b"]).is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("3.2.1"));
        assert!(is_valid("0.1.0-alpha.1"));
        assert!(!is_valid("wibble"));
        assert!(!is_valid("1.2"));
    }

    #[test]
    fn test_prerelease_identifiers() {
        assert_eq!(
            prerelease_identifiers("0.1.0-alpha.1").unwrap(),
            vec!["alpha".to_string(), "1".to_string()]
        );
        assert!(prerelease_identifiers("1.0.0").unwrap().is_empty());
        assert!(prerelease_identifiers("nope").is_none());
    }
}
