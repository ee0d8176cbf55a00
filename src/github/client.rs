use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{Environment, RepoSlug};
use crate::error::{Result, SimpverError};
use crate::github::{tag_ref, BranchHead, PullRequestInfo, RemoteRepository};

const PER_PAGE: usize = 100;

/// GitHub REST API client bound to one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    repository: RepoSlug,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct BranchResponse {
    name: String,
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct TagResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    number: u64,
    #[serde(default)]
    merged_at: Option<String>,
    #[serde(default)]
    labels: Vec<LabelResponse>,
}

#[derive(Debug, Deserialize)]
struct LabelResponse {
    name: String,
}

#[derive(Debug, Serialize)]
struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    ref_name: &'a str,
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefResponse {
    #[serde(rename = "ref")]
    ref_name: String,
}

impl GitHubClient {
    /// Creates a client for the repository and credential in `env`.
    ///
    /// No request is made until one of the [RemoteRepository] methods runs.
    pub fn new(env: &Environment) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", env.token))
            .map_err(|_| SimpverError::config("Access token contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("simpver/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SimpverError::remote(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: env.api_url.clone(),
            repository: env.repository.clone(),
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.api_url, self.repository.owner, self.repository.name, path
        )
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.repo_url(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).query(query).send()?;
        Ok(check_status(response, "GET", path)?.json()?)
    }

    /// Walks a paged listing in order, handing each page to `visit`.
    ///
    /// Stops after a short page or when `visit` returns true. Returns the
    /// number of pages fetched.
    fn for_each_page<T, F>(&self, path: &str, mut visit: F) -> Result<usize>
    where
        T: DeserializeOwned,
        F: FnMut(Vec<T>) -> bool,
    {
        let mut page = 1;

        loop {
            let batch: Vec<T> = self.get(
                path,
                &[
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ],
            )?;
            let count = batch.len();

            if visit(batch) || count < PER_PAGE {
                return Ok(page);
            }
            page += 1;
        }
    }
}

/// Turns a non-2xx response into a remote error carrying the API message.
fn check_status(response: Response, method: &str, path: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(SimpverError::remote(format!(
        "GitHub API error: {} {} returned {} - {}",
        method, path, status, body
    )))
}

impl RemoteRepository for GitHubClient {
    fn default_branch_head(&self) -> Result<BranchHead> {
        let repo: RepoResponse = self.get("", &[])?;
        let branch: BranchResponse =
            self.get(&format!("/branches/{}", repo.default_branch), &[])?;

        debug!(branch = %branch.name, sha = %branch.commit.sha, "Resolved default branch head");
        Ok(BranchHead {
            branch: branch.name,
            sha: branch.commit.sha,
        })
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let pages = self.for_each_page("/tags", |batch: Vec<TagResponse>| {
            names.extend(batch.into_iter().map(|tag| tag.name));
            false
        })?;

        debug!(count = names.len(), pages, "Listed tags");
        Ok(names)
    }

    fn find_tag(&self, matches: &dyn Fn(&str) -> bool) -> Result<Option<String>> {
        let mut found = None;
        let pages = self.for_each_page("/tags", |batch: Vec<TagResponse>| {
            found = batch
                .into_iter()
                .map(|tag| tag.name)
                .find(|name| matches(name));
            found.is_some()
        })?;

        debug!(pages, found = ?found, "Scanned tags");
        Ok(found)
    }

    fn pulls_for_commit(&self, sha: &str) -> Result<Vec<PullRequestInfo>> {
        let mut pulls = Vec::new();
        self.for_each_page(
            &format!("/commits/{}/pulls", sha),
            |batch: Vec<PullResponse>| {
                pulls.extend(batch.into_iter().map(|pull| PullRequestInfo {
                    number: pull.number,
                    merged: pull.merged_at.is_some(),
                    labels: pull.labels.into_iter().map(|label| label.name).collect(),
                }));
                false
            },
        )?;

        Ok(pulls)
    }

    fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<String> {
        let ref_name = tag_ref(tag);
        let request = CreateRefRequest {
            ref_name: &ref_name,
            sha,
        };

        let url = self.repo_url("/git/refs");
        debug!(%url, %ref_name, %sha, "POST");

        let response = self.client.post(&url).json(&request).send()?;
        let created: RefResponse = check_status(response, "POST", "/git/refs")?.json()?;

        info!(reference = %created.ref_name, %sha, "Created tag reference");
        Ok(created.ref_name)
    }
}
