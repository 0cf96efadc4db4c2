//! List command - Show template groups and what is already installed

use std::path::Path;

use colored::Colorize;

use crate::groups::{COMMON_PATHS, GROUPS};
use crate::project_root::resolve_project_root;
use crate::templates::resolve_templates_dir;

pub fn run(project_dir: Option<&Path>, templates_dir: Option<&Path>) -> anyhow::Result<()> {
    let project_root = resolve_project_root(project_dir);
    let templates = resolve_templates_dir(templates_dir);

    println!("{}", "\nTemplate groups:\n".bold());

    for (i, group) in GROUPS.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).cyan(),
            group.display_name.bold()
        );
        for &path in group.paths {
            println!("     {}", annotate(path, &project_root, &templates));
        }
    }

    println!("{}", "\nAlways installed:".bold());
    for &path in COMMON_PATHS {
        println!("     {}", annotate(path, &project_root, &templates));
    }
    println!();

    Ok(())
}

/// Render one template path with its bundled/installed state.
fn annotate(name: &str, project_root: &Path, templates: &Path) -> String {
    if !templates.join(name).exists() {
        return format!("{name} {}", "(not bundled)".yellow());
    }
    if project_root.join(name).exists() {
        return format!("{name} {}", "(installed)".green());
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_annotate_states() {
        let tmp = tempfile::tempdir().unwrap();
        let templates = tmp.path().join("templates");
        let project = tmp.path().join("project");
        fs::create_dir_all(templates.join(".cursor")).unwrap();
        fs::write(templates.join("AGENTS.md"), "agents").unwrap();
        fs::create_dir_all(project.join(".cursor")).unwrap();

        // bundled and installed
        assert!(annotate(".cursor", &project, &templates).contains("installed"));
        // bundled, not installed
        assert_eq!(annotate("AGENTS.md", &project, &templates), "AGENTS.md");
        // not bundled at all
        assert!(annotate(".windsurf", &project, &templates).contains("not bundled"));
    }

    #[test]
    fn test_run_lists_without_error() {
        let tmp = tempfile::tempdir().unwrap();
        run(Some(tmp.path()), Some(tmp.path().join("templates").as_path())).unwrap();
    }
}
