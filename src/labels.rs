pub use crate::version::VersionBump;

/// Label name that requests a major bump unless configured otherwise.
pub const DEFAULT_MAJOR_LABEL: &str = "major";

/// Picks the bump for a release from the merged pull request's labels.
///
/// A label named exactly `major_label` (case-sensitive) selects a major bump.
/// Anything else, including no pull request at all, is a minor bump.
pub fn determine_version_bump<S: AsRef<str>>(
    labels: Option<&[S]>,
    major_label: &str,
) -> VersionBump {
    let has_major = labels
        .unwrap_or_default()
        .iter()
        .any(|label| label.as_ref() == major_label);

    if has_major {
        VersionBump::Major
    } else {
        VersionBump::Minor
    }
}
