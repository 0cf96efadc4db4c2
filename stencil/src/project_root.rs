//! Project root resolution.
//!
//! During an npm/yarn/pnpm install the target project arrives as the
//! `INIT_CWD` environment variable; outside of that we look for the nearest
//! `package.json` that is not buried inside `node_modules`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Upward search bound when looking for the project manifest.
const MAX_WALK_UP: usize = 10;

/// Resolve the directory templates are installed into.
///
/// Prefers the supplied hint (`--project-dir` flag or `INIT_CWD`). Without
/// a hint, walks up from the current directory looking for a `package.json`
/// outside `node_modules`, falling back to the current directory. Best
/// effort: always returns an absolute path, never an error.
pub fn resolve_project_root(hint: Option<&Path>) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Some(hint) = hint {
        return absolute(hint, &cwd);
    }

    if let Some(found) = find_manifest_root(&cwd) {
        debug!("resolved project root at {}", found.display());
        return found;
    }

    cwd
}

/// Walk up from `start`, bounded to [`MAX_WALK_UP`] levels, looking for a
/// directory that contains `package.json` and is not nested inside
/// `node_modules`. First match wins.
pub fn find_manifest_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;

    for _ in 0..MAX_WALK_UP {
        if dir.join("package.json").exists() && !inside_dependency_cache(dir) {
            return Some(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent,
            _ => break,
        }
    }

    None
}

/// Subset of package.json consulted for display purposes.
#[derive(serde::Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// Read the `name` field from the project's package.json, if present.
pub fn package_name(root: &Path) -> Option<String> {
    let content = fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: PackageManifest = serde_json::from_str(&content).ok()?;
    manifest.name
}

fn inside_dependency_cache(dir: &Path) -> bool {
    dir.components()
        .any(|component| component.as_os_str() == "node_modules")
}

/// Make `path` absolute against `cwd` without requiring it to exist.
fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
