//! Main release workflow
//!
//! Everything after environment validation: find the current tag, read the
//! merged pull request's labels, bump, tag the head commit and write the
//! artifact. `main.rs` only parses arguments and builds the client.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::artifact::write_artifact;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::Result;
use crate::github::{first_merged_pull, tag_ref, RemoteRepository};
use crate::labels::determine_version_bump;
use crate::tag::{find_current_tag, is_release_tag, TagSelection};
use crate::ui;
use crate::version::{bump_version, VersionBump};

/// Per-run options layered over the file configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseOptions {
    /// Overrides `Config::artifact`
    pub artifact: Option<PathBuf>,

    /// Compute and report the new tag without creating or writing anything
    pub dry_run: bool,
}

/// Result of a release run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Tag the bump started from (the fallback if none existed)
    pub current_tag: String,

    /// Newly computed tag
    pub new_tag: String,

    pub bump: VersionBump,

    /// Commit the new tag points at
    pub sha: String,

    /// Pull request whose labels decided the bump
    pub pull_number: Option<u64>,

    /// Created reference, `None` on a dry run
    pub reference: Option<String>,

    /// Artifact written, `None` on a dry run
    pub artifact: Option<PathBuf>,
}

/// Labels of the first merged pull request associated with `sha`.
///
/// Returns `None` (and warns) when no associated pull request is merged.
pub fn pull_request_labels<R: RemoteRepository + ?Sized>(
    repo: &R,
    sha: &str,
) -> Result<Option<(u64, Vec<String>)>> {
    let pulls = repo.pulls_for_commit(sha)?;
    debug!(%sha, count = pulls.len(), "Pull requests for head commit");

    match first_merged_pull(&pulls) {
        Some(pull) => {
            ui::display_pull_labels(pull.number, &pull.labels);
            Ok(Some((pull.number, pull.labels.clone())))
        }
        None => {
            ui::display_boundary_warning(&BoundaryWarning::NoMergedPullRequest {
                sha: sha.to_string(),
            });
            Ok(None)
        }
    }
}

/// Runs one release against `repo`.
///
/// No step is rolled back when a later one fails: a reference created on the
/// remote stays even if the artifact cannot be written.
pub fn run_release<R: RemoteRepository + ?Sized>(
    repo: &R,
    config: &Config,
    options: &ReleaseOptions,
) -> Result<ReleaseOutcome> {
    let found = match config.selection {
        TagSelection::PlatformOrder => repo.find_tag(&is_release_tag)?,
        selection => find_current_tag(&repo.list_tags()?, selection)?,
    };
    let current_tag = match found {
        Some(tag) => tag,
        None => {
            ui::display_boundary_warning(&BoundaryWarning::NoReleaseTag {
                fallback: config.initial_tag.clone(),
            });
            config.initial_tag.clone()
        }
    };
    ui::display_current_tag(&current_tag);

    let head = repo.default_branch_head()?;
    debug!(branch = %head.branch, sha = %head.sha, "Default branch head");

    let pull = pull_request_labels(repo, &head.sha)?;
    let labels = pull.as_ref().map(|(_, labels)| labels.as_slice());
    let bump = determine_version_bump(labels, &config.major_label);
    let new_tag = bump_version(&current_tag, bump)?;
    info!(current = %current_tag, new = %new_tag, ?bump, "Computed next version");

    let artifact_path = options
        .artifact
        .clone()
        .unwrap_or_else(|| config.artifact.clone());

    let (reference, artifact) = if options.dry_run {
        ui::display_status(&format!(
            "Dry run: would create {} at {} and write {}",
            tag_ref(&new_tag),
            head.sha,
            artifact_path.display()
        ));
        ui::display_new_tag(&new_tag);
        (None, None)
    } else {
        let reference = repo.create_tag_ref(&new_tag, &head.sha)?;
        ui::display_new_tag(&new_tag);
        write_artifact(&artifact_path, &new_tag)?;
        (Some(reference), Some(artifact_path))
    };

    Ok(ReleaseOutcome {
        current_tag,
        new_tag,
        bump,
        sha: head.sha,
        pull_number: pull.map(|(number, _)| number),
        reference,
        artifact,
    })
}
