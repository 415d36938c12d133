use serde::Serialize;

/// Message when a CI build has neither a tag nor a numbered branch build
pub const UNRESOLVABLE_MESSAGE: &str = "Could not determine a version. CI environment invalid?";

/// Outcome of version resolution
///
/// Exactly one of version or error is present; a dist tag only ever
/// accompanies a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolution {
    Resolved {
        version: String,
        #[serde(rename = "distTag", skip_serializing_if = "Option::is_none")]
        dist_tag: Option<String>,
    },
    Unresolved {
        error: String,
    },
}

impl Resolution {
    pub fn resolved(version: impl Into<String>, dist_tag: Option<String>) -> Self {
        Resolution::Resolved {
            version: version.into(),
            dist_tag,
        }
    }

    pub fn unresolved(error: impl Into<String>) -> Self {
        Resolution::Unresolved {
            error: error.into(),
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { version, .. } => Some(version.as_str()),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn dist_tag(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { dist_tag, .. } => dist_tag.as_deref(),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { .. } => None,
            Resolution::Unresolved { error } => Some(error.as_str()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_accessors() {
        let r = Resolution::resolved("1.0.0-dev.3", Some("dev".to_string()));
        assert_eq!(r.version(), Some("1.0.0-dev.3"));
        assert_eq!(r.dist_tag(), Some("dev"));
        assert_eq!(r.error(), None);
        assert!(r.is_resolved());
    }

    #[test]
    fn test_unresolved_accessors() {
        let r = Resolution::unresolved(UNRESOLVABLE_MESSAGE);
        assert_eq!(r.version(), None);
        assert_eq!(r.dist_tag(), None);
        assert_eq!(r.error(), Some(UNRESOLVABLE_MESSAGE));
        assert!(!r.is_resolved());
    }

    #[test]
    fn test_json_shape() {
        let with_tag = Resolution::resolved("0.1.0-alpha.1", Some("alpha".to_string()));
        assert_eq!(
            serde_json::to_string(&with_tag).unwrap(),
            r#"{"version":"0.1.0-alpha.1","distTag":"alpha"}"#
        );

        let without_tag = Resolution::resolved("3.2.1", None);
        assert_eq!(
            serde_json::to_string(&without_tag).unwrap(),
            r#"{"version":"3.2.1"}"#
        );

        let failed = Resolution::unresolved("Invalid semver tag: wibble");
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"error":"Invalid semver tag: wibble"}"#
        );
    }
}
