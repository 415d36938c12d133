use super::version;

/// Represents a git tag that triggered a release build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract the version part of the tag: everything from the first digit
    /// ("v1.2.3" -> "1.2.3", "my-app-2.0.0" -> "2.0.0")
    pub fn version_part(&self) -> &str {
        self.name.trim_start_matches(|c: char| !c.is_ascii_digit())
    }

    /// The version part, if it is valid semver
    pub fn release_version(&self) -> Option<&str> {
        let candidate = self.version_part();
        version::is_valid(candidate).then_some(candidate)
    }

    /// Channel label of a prerelease tag: its first prerelease identifier
    pub fn channel(&self) -> Option<String> {
        version::prerelease_identifiers(self.release_version()?)?
            .into_iter()
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
    }

    #[test]
    fn test_tag_version_part() {
        assert_eq!(Tag::new("v1.2.3").version_part(), "1.2.3");
        assert_eq!(Tag::new("3.2.1").version_part(), "3.2.1");
        assert_eq!(Tag::new("my-app-2.0.0").version_part(), "2.0.0");
        assert_eq!(Tag::new("wibble").version_part(), "");
    }

    #[test]
    fn test_release_version() {
        assert_eq!(Tag::new("v1.1.1").release_version(), Some("1.1.1"));
        assert_eq!(Tag::new("wibble").release_version(), None);
        assert_eq!(Tag::new("v1.2").release_version(), None);
    }

    #[test]
    fn test_channel() {
        assert_eq!(
            Tag::new("v0.1.0-alpha.1").channel(),
            Some("alpha".to_string())
        );
        assert_eq!(Tag::new("v0.1.0-3").channel(), Some("3".to_string()));
        assert_eq!(Tag::new("v3.2.1").channel(), None);
        assert_eq!(Tag::new("wibble").channel(), None);
    }
}
