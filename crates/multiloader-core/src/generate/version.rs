//! Gradle version formatting for wrapper distribution URLs

use semver::Version;

/// Parse version string, handling a leading `v`
pub fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).ok()
}

/// Turn a release tag into the version used by distribution file names
///
/// `v8.12.1` -> `8.12.1`, `v8.12.0` -> `8.12`, `v8.13.0-RC1` -> `8.13-RC1`.
/// Anything that is not `major.minor.patch[-tag]` is returned unchanged.
pub fn distribution_version(tag: &str) -> String {
    let version = match parse_version(tag) {
        Some(v) if v.build.is_empty() => v,
        _ => return tag.to_string(),
    };

    let mut formatted = if version.patch == 0 {
        format!("{}.{}", version.major, version.minor)
    } else {
        format!("{}.{}.{}", version.major, version.minor, version.patch)
    };
    if !version.pre.is_empty() {
        formatted.push('-');
        formatted.push_str(version.pre.as_str());
    }
    formatted
}
