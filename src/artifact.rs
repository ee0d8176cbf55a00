use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Replaces the artifact at `path` with exactly `version` (no trailing newline).
///
/// Any existing file is removed first. The write is not transactional: if it
/// fails, a tag already created on the remote stays in place.
pub fn write_artifact(path: &Path, version: &str) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "Removed previous artifact"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::write(path, version)?;
    debug!(path = %path.display(), %version, "Wrote artifact");
    Ok(())
}
