//! Current release tag discovery.

use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SimpverError};

/// Tag used when the repository has no release tag yet.
pub const DEFAULT_INITIAL_TAG: &str = "v1.0";

/// How the current release tag is chosen from the repository's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagSelection {
    /// First hyphen-free tag in the order the hosting platform returns them.
    #[default]
    PlatformOrder,
    /// Highest hyphen-free `vX.Y[.Z]` tag by version comparison.
    Highest,
}

/// Returns true for tags that count as releases (no pre-release suffix).
pub fn is_release_tag(name: &str) -> bool {
    !name.contains('-')
}

/// Finds the tag the next version is computed from.
///
/// Returns `None` when no tag qualifies; callers fall back to their initial tag.
pub fn find_current_tag<S: AsRef<str>>(
    tags: &[S],
    selection: TagSelection,
) -> Result<Option<String>> {
    let found = match selection {
        TagSelection::PlatformOrder => tags
            .iter()
            .map(|tag| tag.as_ref())
            .find(|name| is_release_tag(name))
            .map(str::to_string),
        TagSelection::Highest => highest_release_tag(tags)?,
    };

    debug!(?selection, candidates = tags.len(), current = ?found, "Selected current tag");
    Ok(found)
}

fn highest_release_tag<S: AsRef<str>>(tags: &[S]) -> Result<Option<String>> {
    let re = Regex::new(r"^v(\d+)\.(\d+)(?:\.(\d+))?$")
        .map_err(|e| SimpverError::version(format!("Invalid tag pattern: {}", e)))?;

    let parse = |name: &str| -> Option<Version> {
        let caps = re.captures(name)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Version::new(major, minor, patch))
    };

    // Reversed so that the first of several equal versions wins.
    Ok(tags
        .iter()
        .map(|tag| tag.as_ref())
        .filter(|name| is_release_tag(name))
        .filter_map(|name| parse(name).map(|version| (version, name)))
        .rev()
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, name)| name.to_string()))
}
