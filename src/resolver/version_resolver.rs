use crate::domain::resolution::UNRESOLVABLE_MESSAGE;
use crate::domain::{branch, version, BuildKind, Context, Resolution, Tag};
use crate::error::Result;

/// Prerelease identifier and dist tag for builds outside CI
pub const LOCAL_CHANNEL: &str = "local";

/// Decide the release version for a build.
///
/// Rules, first match wins:
/// - **Not CI**: base version with prerelease `local`, dist tag `local`
/// - **Tag**: the tag from its first digit onward, if valid semver; dist tag is
///   its first prerelease identifier, if any
/// - **Branch + build number**: base version with prerelease
///   `<sanitized branch>.<build number>`, dist tag is the sanitized branch
///   with dots replaced by hyphens
/// - Otherwise unresolved
///
/// # Returns
/// * `Ok(Resolution)` - Resolved version or an expected resolution failure
/// * `Err` - If `base_version` is not valid semver
pub fn resolve(base_version: &str, context: &Context) -> Result<Resolution> {
    let base = version::parse_base(base_version)?;

    let kind = context.kind();
    tracing::debug!(?kind, base = %base, "resolving version");

    let resolution = match kind {
        BuildKind::NotCi => {
            let local = version::with_prerelease(&base, &[LOCAL_CHANNEL])?;
            Resolution::resolved(local.to_string(), Some(LOCAL_CHANNEL.to_string()))
        }
        BuildKind::TaggedRelease(raw) => {
            let tag = Tag::new(raw);
            match tag.release_version() {
                Some(release) => Resolution::resolved(release, tag.channel()),
                None => Resolution::unresolved(format!("Invalid semver tag: {}", raw)),
            }
        }
        BuildKind::BranchBuild {
            branch: name,
            build_number,
        } => {
            let sanitized = branch::sanitize(name);
            let number = build_number.to_string();
            match version::with_prerelease(&base, &[&sanitized, &number]) {
                Ok(build) => {
                    Resolution::resolved(build.to_string(), Some(branch::dist_tag(&sanitized)))
                }
                Err(_) => Resolution::unresolved(format!("Invalid prerelease for branch: {}", name)),
            }
        }
        BuildKind::Unresolvable => Resolution::unresolved(UNRESOLVABLE_MESSAGE),
    };

    Ok(resolution)
}
