//! Install command - Copy editor configuration templates into a project

use std::io::IsTerminal;
use std::path::Path;

use colored::Colorize;

use crate::copier::{copy_tree, CopyOutcome};
use crate::groups::{expand_selection, parse_selection, COMMON_PATHS, GROUPS};
use crate::project_root::{package_name, resolve_project_root};
use crate::templates::resolve_templates_dir;

pub fn run(
    all: bool,
    select: Option<&str>,
    project_dir: Option<&Path>,
    templates_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let project_root = resolve_project_root(project_dir);
    let templates = resolve_templates_dir(templates_dir);

    let banner = match package_name(&project_root) {
        Some(name) => format!("\nSetting up AI editor configuration for {name}\n"),
        None => format!(
            "\nSetting up AI editor configuration in {}\n",
            project_root.display()
        ),
    };
    println!("{}", banner.bold());

    // Benign: an install without bundled templates has nothing to do.
    if !templates.exists() {
        println!(
            "{}",
            format!("Templates folder not found at {}", templates.display()).yellow()
        );
        println!("{}", "\nNothing to copy.\n".dimmed());
        return Ok(());
    }

    let selection = resolve_selection(all, select)?;
    if selection.is_empty() {
        println!(
            "{}",
            "\nNo template groups selected. Nothing installed.\n".yellow()
        );
        return Ok(());
    }

    let paths = expand_selection(GROUPS, COMMON_PATHS, &selection);

    let mut outcome = CopyOutcome::default();
    for name in paths {
        let child = copy_tree(
            &templates.join(name),
            &project_root.join(name),
            &project_root,
        )?;
        outcome.merge(child);
    }

    report(&outcome);
    Ok(())
}

/// Determine which groups to install.
///
/// Flags win over the prompt, and a non-interactive stdin (the normal
/// postinstall case) defaults to every group instead of blocking on a line
/// that will never arrive. The prompt is the single blocking step; parsing
/// stays in [`parse_selection`], which is pure.
fn resolve_selection(all: bool, select: Option<&str>) -> anyhow::Result<Vec<usize>> {
    if all {
        return Ok((0..GROUPS.len()).collect());
    }

    if let Some(raw) = select {
        return Ok(parse_selection(raw, GROUPS.len()));
    }

    if !std::io::stdin().is_terminal() {
        return Ok((0..GROUPS.len()).collect());
    }

    print_menu();

    let raw: String = dialoguer::Input::new()
        .with_prompt("Groups to install (comma-separated, empty for all)")
        .allow_empty(true)
        .interact_text()?;

    Ok(parse_selection(&raw, GROUPS.len()))
}

fn print_menu() {
    println!("{}", "Available template groups:".bold());
    for (i, group) in GROUPS.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), group.display_name);
    }
    println!(
        "  {} All of the above",
        format!("{}.", GROUPS.len() + 1).cyan()
    );
    println!();
}

fn report(outcome: &CopyOutcome) {
    if outcome.is_empty() {
        println!(
            "{}",
            "✓ All template files already exist (existing files preserved)".green()
        );
    } else {
        println!(
            "{}",
            format!("✓ Created {} file(s):", outcome.len()).green()
        );
        for path in outcome.created() {
            println!("  {} {}", "-".dimmed(), path.display());
        }
    }
    println!("{}", "\n✓ Setup complete!\n".green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn seed_templates(dir: &Path) {
        write_file(&dir.join(".cursor").join("rules").join("base.mdc"), "cursor");
        write_file(&dir.join(".windsurf").join("rules.md"), "windsurf");
        write_file(&dir.join(".claude").join("settings.json"), "{}");
        write_file(&dir.join("CLAUDE.md"), "claude");
        write_file(&dir.join(".github").join("copilot-instructions.md"), "copilot");
        write_file(&dir.join("AGENTS.md"), "agents");
    }

    #[test]
    fn test_run_with_select_copies_group_and_common_only() {
        let tmp = tempfile::tempdir().unwrap();
        let templates = tmp.path().join("templates");
        let project = tmp.path().join("project");
        seed_templates(&templates);
        fs::create_dir_all(&project).unwrap();

        run(false, Some("1"), Some(project.as_path()), Some(templates.as_path())).unwrap();

        assert!(project.join(".cursor").join("rules").join("base.mdc").exists());
        assert!(project.join("AGENTS.md").exists());
        assert!(!project.join(".windsurf").exists());
        assert!(!project.join("CLAUDE.md").exists());
    }

    #[test]
    fn test_run_all_copies_everything() {
        let tmp = tempfile::tempdir().unwrap();
        let templates = tmp.path().join("templates");
        let project = tmp.path().join("project");
        seed_templates(&templates);
        fs::create_dir_all(&project).unwrap();

        run(true, None, Some(project.as_path()), Some(templates.as_path())).unwrap();

        assert!(project.join(".cursor").exists());
        assert!(project.join(".windsurf").exists());
        assert!(project.join(".claude").join("settings.json").exists());
        assert!(project.join("CLAUDE.md").exists());
        assert!(project.join(".github").join("copilot-instructions.md").exists());
        assert!(project.join("AGENTS.md").exists());
    }

    #[test]
    fn test_run_never_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let templates = tmp.path().join("templates");
        let project = tmp.path().join("project");
        seed_templates(&templates);
        write_file(&project.join("AGENTS.md"), "customized");

        run(true, None, Some(project.as_path()), Some(templates.as_path())).unwrap();
        run(true, None, Some(project.as_path()), Some(templates.as_path())).unwrap();

        assert_eq!(
            fs::read_to_string(project.join("AGENTS.md")).unwrap(),
            "customized"
        );
    }

    #[test]
    fn test_run_missing_templates_is_benign() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        let result = run(
            true,
            None,
            Some(project.as_path()),
            Some(tmp.path().join("nonexistent").as_path()),
        );
        assert!(result.is_ok());
        assert!(!project.join("AGENTS.md").exists());
    }

    #[test]
    fn test_run_junk_selection_cancels_without_copying() {
        let tmp = tempfile::tempdir().unwrap();
        let templates = tmp.path().join("templates");
        let project = tmp.path().join("project");
        seed_templates(&templates);
        fs::create_dir_all(&project).unwrap();

        run(false, Some("foo,99"), Some(project.as_path()), Some(templates.as_path())).unwrap();

        assert!(!project.join(".cursor").exists());
        assert!(!project.join("AGENTS.md").exists());
    }
}
