//! Doctor command - Check template source, project root and editor CLIs

use std::path::Path;

use colored::Colorize;

use crate::project_root::{package_name, resolve_project_root};
use crate::templates::resolve_templates_dir;

struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    required: bool,
    details: Option<String>,
}

enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

/// Editor CLIs worth reporting on; all optional.
const EDITOR_CLIS: &[(&str, &str, &str)] = &[
    ("cursor", "Cursor CLI", "Install Cursor and enable its shell command"),
    ("windsurf", "Windsurf CLI", "Install Windsurf and enable its shell command"),
    ("code", "VS Code CLI", "Install VS Code and run 'Shell Command: Install code'"),
    ("claude", "Claude CLI", "Install: npm install -g @anthropic-ai/claude-code"),
];

fn format_result(result: &CheckResult) -> String {
    let icon = match result.status {
        CheckStatus::Pass => "✓".green().to_string(),
        CheckStatus::Fail => "✗".red().to_string(),
        CheckStatus::Warn => "!".yellow().to_string(),
    };

    let suffix = if result.required {
        String::new()
    } else {
        " (optional)".dimmed().to_string()
    };

    let message = match result.status {
        CheckStatus::Fail => result.message.red().to_string(),
        _ => result.message.clone(),
    };

    let mut line = format!("  {icon} {}: {message}{suffix}", result.name);

    if let Some(ref details) = result.details {
        if !matches!(result.status, CheckStatus::Pass) {
            line.push_str(&format!("\n      {}", details.dimmed()));
        }
    }

    line
}

fn check_command_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

fn check_templates(templates: &Path) -> CheckResult {
    if templates.exists() {
        CheckResult {
            name: "Template source".into(),
            status: CheckStatus::Pass,
            message: templates.display().to_string(),
            required: true,
            details: None,
        }
    } else {
        CheckResult {
            name: "Template source".into(),
            status: CheckStatus::Fail,
            message: format!("Not found at {}", templates.display()),
            required: true,
            details: Some(
                "Set STENCIL_TEMPLATES_DIR or pass --templates-dir to point at a template tree"
                    .into(),
            ),
        }
    }
}

fn check_project_root(project_root: &Path) -> CheckResult {
    CheckResult {
        name: "Project root".into(),
        status: CheckStatus::Pass,
        message: project_root.display().to_string(),
        required: true,
        details: None,
    }
}

fn check_manifest(project_root: &Path) -> CheckResult {
    match package_name(project_root) {
        Some(name) => CheckResult {
            name: "Project manifest".into(),
            status: CheckStatus::Pass,
            message: format!("package.json ({name})"),
            required: false,
            details: None,
        },
        None => CheckResult {
            name: "Project manifest".into(),
            status: CheckStatus::Warn,
            message: "No readable package.json at the project root".into(),
            required: false,
            details: Some("Root detection falls back to the current directory".into()),
        },
    }
}

fn check_editor_cli_with<F>(command: &str, display_name: &str, hint: &str, exists: F) -> CheckResult
where
    F: Fn(&str) -> bool,
{
    if exists(command) {
        CheckResult {
            name: display_name.into(),
            status: CheckStatus::Pass,
            message: "Installed".into(),
            required: false,
            details: None,
        }
    } else {
        CheckResult {
            name: display_name.into(),
            status: CheckStatus::Warn,
            message: "Not found on PATH".into(),
            required: false,
            details: Some(hint.into()),
        }
    }
}

pub fn run(project_dir: Option<&Path>, templates_dir: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", "\nStencil environment check\n".bold());

    let project_root = resolve_project_root(project_dir);
    let templates = resolve_templates_dir(templates_dir);

    let mut results = vec![
        check_templates(&templates),
        check_project_root(&project_root),
        check_manifest(&project_root),
    ];
    for &(command, display_name, hint) in EDITOR_CLIS {
        results.push(check_editor_cli_with(
            command,
            display_name,
            hint,
            check_command_exists,
        ));
    }

    for result in &results {
        println!("{}", format_result(result));
    }
    println!();

    let failed_required = results
        .iter()
        .any(|r| matches!(r.status, CheckStatus::Fail) && r.required);

    if failed_required {
        println!("{}", "Some required checks failed.".red());
        std::process::exit(1);
    }

    println!("{}", "Environment looks good.".green());
    Ok(())
}
