//! Release workflow driven by the command-line entry point.

pub mod orchestration;

pub use orchestration::{pull_request_labels, run_release, ReleaseOptions, ReleaseOutcome};
