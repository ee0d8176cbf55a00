use crate::error::{SimpverError, Result};

/// Represents the type of version bump to apply.
///
/// Chosen from the labels of the pull request that produced the release commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
}

/// A release tag split into its numeric segments.
///
/// Segments are kept as the original strings so that bumping one segment
/// leaves every other segment byte-for-byte intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    segments: Vec<String>,
}

impl VersionTag {
    /// Parses a tag such as `v1.2` into its dot-separated segments.
    ///
    /// The leading lowercase `v` is optional. At least two segments are
    /// required and the first two must be non-negative integers.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag.strip_prefix('v').unwrap_or(tag);

        let segments: Vec<String> = clean_tag.split('.').map(str::to_string).collect();
        if segments.len() < 2 {
            return Err(SimpverError::version(format!(
                "Invalid version format: '{}' - expected vMAJOR.MINOR",
                tag
            )));
        }

        for (name, segment) in ["major", "minor"].iter().zip(&segments) {
            segment.parse::<u64>().map_err(|_| {
                SimpverError::version(format!("Invalid {} version in '{}': {}", name, tag, segment))
            })?;
        }

        Ok(VersionTag { segments })
    }

    /// Increments the segment at `index`, leaving the others untouched.
    fn increment(mut self, index: usize) -> Result<Self> {
        let current = self.segments[index].parse::<u64>().map_err(|_| {
            SimpverError::version(format!("Invalid version segment: {}", self.segments[index]))
        })?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| SimpverError::version(format!("Version segment overflow: {}", current)))?;
        self.segments[index] = next.to_string();
        Ok(self)
    }

    /// Applies a bump, returning the new tag.
    pub fn bump(self, bump_type: VersionBump) -> Result<Self> {
        match bump_type {
            // Minor is deliberately not reset to zero.
            VersionBump::Major => self.increment(0),
            VersionBump::Minor => self.increment(1),
        }
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.segments.join("."))
    }
}

/// Bumps the major segment of a tag: `v2.3` -> `v3.3`.
pub fn big_bump(tag: &str) -> Result<String> {
    bump_version(tag, VersionBump::Major)
}

/// Bumps the minor segment of a tag: `v1.9` -> `v1.10`.
pub fn small_bump(tag: &str) -> Result<String> {
    bump_version(tag, VersionBump::Minor)
}

/// Parses `tag`, applies `bump_type` and formats the result as a tag string.
pub fn bump_version(tag: &str, bump_type: VersionBump) -> Result<String> {
    Ok(VersionTag::parse(tag)?.bump(bump_type)?.to_string())
}
