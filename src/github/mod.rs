//! Remote repository abstraction layer
//!
//! Everything simpver needs from the hosting platform goes through the
//! [RemoteRepository] trait, so the release logic can run against the real
//! GitHub API or an in-memory stand-in.
//!
//! - [client::GitHubClient]: GitHub REST API over a blocking `reqwest` client
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use simpver::github::RemoteRepository;
//! # fn example<R: RemoteRepository>(repo: &R) -> simpver::Result<()> {
//! let head = repo.default_branch_head()?;
//! for pull in repo.pulls_for_commit(&head.sha)? {
//!     println!("#{} merged={}", pull.number, pull.merged);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockRepository;

use crate::error::Result;

/// Tip of the repository's default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHead {
    /// Branch name (e.g. "main")
    pub branch: String,
    /// Full commit SHA at the tip
    pub sha: String,
}

/// A pull request associated with a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub merged: bool,
    /// Label names in platform order
    pub labels: Vec<String>,
}

/// Operations on the hosting platform used by a release run.
///
/// Implementations map transport and API failures to
/// [crate::error::SimpverError::Remote].
pub trait RemoteRepository: Send + Sync {
    /// Resolve the default branch and the commit at its tip.
    fn default_branch_head(&self) -> Result<BranchHead>;

    /// List every tag name, in the order the platform returns them.
    ///
    /// GitHub returns the most recently created tags first; callers that rely
    /// on "first release tag" semantics depend on that order.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// First tag in platform order accepted by `matches`.
    ///
    /// Implementations that page through tags stop at the first match.
    fn find_tag(&self, matches: &dyn Fn(&str) -> bool) -> Result<Option<String>> {
        Ok(self.list_tags()?.into_iter().find(|name| matches(name)))
    }

    /// Pull requests associated with `sha`, in platform order.
    fn pulls_for_commit(&self, sha: &str) -> Result<Vec<PullRequestInfo>>;

    /// Create `refs/tags/<tag>` pointing at `sha`.
    ///
    /// Fails if the reference already exists, the SHA is unknown, or the
    /// credential lacks permission. Returns the created reference name.
    fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<String>;
}

/// Fully qualified reference name for a tag.
pub fn tag_ref(tag: &str) -> String {
    format!("refs/tags/{}", tag)
}

/// The first merged pull request in platform order, if any.
pub fn first_merged_pull(pulls: &[PullRequestInfo]) -> Option<&PullRequestInfo> {
    pulls.iter().find(|pull| pull.merged)
}
