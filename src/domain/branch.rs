use regex::Regex;
use std::sync::LazyLock;

/// Channel label used for trunk branches
pub const DEV_CHANNEL: &str = "dev";

/// Placeholder when a branch name sanitizes to nothing
pub const BRANCH_PLACEHOLDER: &str = "branch";

const TRUNK_BRANCHES: [&str; 3] = ["main", "master", "develop"];

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/\-._]").expect("separator pattern is valid"));

/// Check if a branch is one of the trunk branches (main/master/develop)
pub fn is_trunk(branch: &str) -> bool {
    TRUNK_BRANCHES.contains(&branch)
}

/// Turn a branch name into dot-separated prerelease identifiers.
///
/// Trunk branches map to `dev`. Otherwise the name is split on `\ / - . _`,
/// each fragment loses its first non-alphanumeric character and any leading
/// zeros, empty fragments are dropped and the rest are joined with `.`.
pub fn sanitize(branch: &str) -> String {
    if is_trunk(branch) {
        return DEV_CHANNEL.to_string();
    }

    let joined = SEPARATORS
        .split(branch)
        .map(clean_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(".");

    if joined.is_empty() {
        BRANCH_PLACEHOLDER.to_string()
    } else {
        joined
    }
}

/// Dist tag for a sanitized branch: dots become hyphens
pub fn dist_tag(sanitized: &str) -> String {
    sanitized.replace('.', "-")
}

fn clean_fragment(fragment: &str) -> String {
    // Only the first offending character goes
    let mut cleaned = fragment.to_string();
    if let Some((idx, ch)) = fragment
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphanumeric())
    {
        cleaned.replace_range(idx..idx + ch.len_utf8(), "");
    }
    cleaned.trim_start_matches('0').to_string()
}
