//! Template source discovery.

use std::env;
use std::path::{Path, PathBuf};

/// Environment override for the template source directory.
pub const TEMPLATES_DIR_ENV: &str = "STENCIL_TEMPLATES_DIR";

/// Locate the bundled templates directory.
///
/// Priority: explicit override, `STENCIL_TEMPLATES_DIR`, `templates/` next
/// to the executable, `share/stencil/templates` under the install prefix,
/// the user config dir, then a bare relative fallback (the install command
/// treats a missing source as "nothing to copy").
pub fn resolve_templates_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Ok(exe) = env::current_exe() {
        let dir = exe.parent().unwrap_or(Path::new("."));
        let bundled = dir.join("templates");
        if bundled.exists() {
            return bundled;
        }
        let share = dir
            .parent()
            .unwrap_or(Path::new("."))
            .join("share")
            .join("stencil")
            .join("templates");
        if share.exists() {
            return share;
        }
    }

    let user = user_templates_dir();
    if user.exists() {
        return user;
    }

    PathBuf::from("templates")
}

/// User-level template directory ($XDG_CONFIG_HOME/stencil/templates or
/// ~/.config/stencil/templates).
pub fn user_templates_dir() -> PathBuf {
    let base = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config")
    } else {
        PathBuf::from(".config")
    };
    base.join("stencil").join("templates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_templates_dir_explicit_override_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = resolve_templates_dir(Some(tmp.path()));
        assert_eq!(dir, tmp.path());
    }

    #[test]
    fn test_resolve_templates_dir_override_need_not_exist() {
        let missing = Path::new("/definitely/not/there/templates");
        assert_eq!(resolve_templates_dir(Some(missing)), missing);
    }

    #[test]
    fn test_user_templates_dir_shape() {
        let dir = user_templates_dir();
        let dir_str = dir.to_string_lossy();
        assert!(dir_str.contains("stencil"));
        assert!(dir_str.ends_with("templates"));
    }
}
