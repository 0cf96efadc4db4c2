//! Non-clobbering recursive copy engine.
//!
//! Copies a template tree into the project, creating only what is missing.
//! Existing destination files are never modified or deleted, so user
//! customizations survive re-runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors raised while copying templates.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
}

/// Destination paths created by a copy run, relative to the project root.
///
/// A path whose destination already existed is never recorded; each path
/// appears at most once, in creation order.
#[derive(Debug, Default)]
pub struct CopyOutcome {
    created: Vec<PathBuf>,
}

impl CopyOutcome {
    /// Merge another outcome into this one, keeping first-seen order.
    pub fn merge(&mut self, other: CopyOutcome) {
        for path in other.created {
            self.record(path);
        }
    }

    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    fn record(&mut self, path: PathBuf) {
        if !self.created.contains(&path) {
            self.created.push(path);
        }
    }
}

/// Copy `source` into `dest`, creating only missing files and directories.
///
/// Each call returns its own outcome; directory recursion merges child
/// outcomes instead of threading a shared accumulator. Recorded paths are
/// relative to `project_root`. A missing `source` is "nothing to copy",
/// not an error.
pub fn copy_tree(
    source: &Path,
    dest: &Path,
    project_root: &Path,
) -> Result<CopyOutcome, CopyError> {
    let mut outcome = CopyOutcome::default();

    if !source.exists() {
        debug!("template path {} missing, skipping", source.display());
        return Ok(outcome);
    }

    if source.is_dir() {
        if !dest.exists() {
            fs::create_dir_all(dest).map_err(|e| CopyError::Create {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }

        let entries = fs::read_dir(source).map_err(|e| CopyError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| CopyError::Read {
                path: source.to_path_buf(),
                source: e,
            })?;
            let child = copy_tree(&entry.path(), &dest.join(entry.file_name()), project_root)?;
            outcome.merge(child);
        }
    } else if copy_file(source, dest)? {
        outcome.record(relative_to_root(dest, project_root));
    }

    Ok(outcome)
}

/// Copy a single file unless the destination already exists.
/// Returns true when a copy actually happened.
fn copy_file(source: &Path, dest: &Path) -> Result<bool, CopyError> {
    if dest.exists() {
        debug!("destination {} exists, preserving", dest.display());
        return Ok(false);
    }

    if let Some(parent) = dest.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CopyError::Create {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::copy(source, dest).map_err(|e| CopyError::Create {
        path: dest.to_path_buf(),
        source: e,
    })?;
    Ok(true)
}

fn relative_to_root(path: &Path, project_root: &Path) -> PathBuf {
    path.strip_prefix(project_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
