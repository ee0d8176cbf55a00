use std::fmt;

/// Non-fatal conditions met during a release run.
/// The run continues with a default; these are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release tag exists, the fallback tag is used as the current one
    NoReleaseTag { fallback: String },
    /// The default branch head has no merged pull request
    NoMergedPullRequest { sha: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleaseTag { fallback } => {
                write!(f, "No release tag found, starting from '{}'", fallback)
            }
            BoundaryWarning::NoMergedPullRequest { sha } => {
                let short_sha = if sha.len() > 7 { &sha[..7] } else { sha.as_str() };
                write!(
                    f,
                    "No merged PR found for latest commit ({}), defaulting to a minor bump",
                    short_sha
                )
            }
        }
    }
}
