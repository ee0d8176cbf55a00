use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, SimpverError};
use crate::github::{tag_ref, BranchHead, PullRequestInfo, RemoteRepository};

/// In-memory repository for testing without network access
///
/// Created references are recorded and also prepended to the tag list, so a
/// second run against the same mock sees the previous run's tag.
pub struct MockRepository {
    head: Option<BranchHead>,
    tags: Mutex<Vec<String>>,
    pulls: HashMap<String, Vec<PullRequestInfo>>,
    created: Mutex<Vec<(String, String)>>,
    fail_create: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            head: None,
            tags: Mutex::new(Vec::new()),
            pulls: HashMap::new(),
            created: Mutex::new(Vec::new()),
            fail_create: false,
        }
    }

    /// Set the default branch and its head commit
    pub fn set_head(&mut self, branch: impl Into<String>, sha: impl Into<String>) {
        self.head = Some(BranchHead {
            branch: branch.into(),
            sha: sha.into(),
        });
    }

    /// Append a tag, keeping platform order (first added is listed first)
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().unwrap_or_else(|e| e.into_inner()).push(name.into());
    }

    /// Associate a pull request with a commit
    pub fn add_pull(&mut self, sha: impl Into<String>, pull: PullRequestInfo) {
        self.pulls.entry(sha.into()).or_default().push(pull);
    }

    /// Make every subsequent `create_tag_ref` call fail
    pub fn fail_tag_creation(&mut self) {
        self.fail_create = true;
    }

    /// References created so far as `(ref, sha)` pairs
    pub fn created_refs(&self) -> Vec<(String, String)> {
        self.created.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteRepository for MockRepository {
    fn default_branch_head(&self) -> Result<BranchHead> {
        self.head
            .clone()
            .ok_or_else(|| SimpverError::remote("Default branch not found"))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn pulls_for_commit(&self, sha: &str) -> Result<Vec<PullRequestInfo>> {
        Ok(self.pulls.get(sha).cloned().unwrap_or_default())
    }

    fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<String> {
        if self.fail_create {
            return Err(SimpverError::remote("Resource not accessible by integration"));
        }

        let ref_name = tag_ref(tag);
        let mut tags = self.tags.lock().unwrap_or_else(|e| e.into_inner());
        if tags.iter().any(|existing| existing == tag) {
            return Err(SimpverError::remote(format!(
                "Reference already exists: {}",
                ref_name
            )));
        }
        tags.insert(0, tag.to_string());

        self.created
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((ref_name.clone(), sha.to_string()));
        Ok(ref_name)
    }
}
