pub mod commands;
pub mod copier;
pub mod groups;
pub mod project_root;
pub mod templates;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stencil",
    version,
    about = "AI editor configuration installer",
    long_about = "Stencil copies bundled AI editor configuration templates (.cursor/, .windsurf/, CLAUDE.md, ...) into a project root, never overwriting files that already exist."
)]
struct Cli {
    /// Install every template group without prompting
    #[arg(short, long)]
    all: bool,

    /// Comma-separated group numbers to install (skips the prompt)
    #[arg(short, long)]
    select: Option<String>,

    /// Project root to install into (npm sets INIT_CWD during postinstall)
    #[arg(long, env = "INIT_CWD")]
    project_dir: Option<PathBuf>,

    /// Template source directory override
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Copy editor configuration templates into the project
    Install {
        /// Install every template group without prompting
        #[arg(short, long)]
        all: bool,

        /// Comma-separated group numbers to install (skips the prompt)
        #[arg(short, long)]
        select: Option<String>,

        /// Project root to install into (npm sets INIT_CWD during postinstall)
        #[arg(long, env = "INIT_CWD")]
        project_dir: Option<PathBuf>,

        /// Template source directory override
        #[arg(long)]
        templates_dir: Option<PathBuf>,
    },

    /// List template groups and their files
    List {
        /// Project root to inspect
        #[arg(long, env = "INIT_CWD")]
        project_dir: Option<PathBuf>,

        /// Template source directory override
        #[arg(long)]
        templates_dir: Option<PathBuf>,
    },

    /// Check template source, project root and editor CLIs
    Doctor {
        /// Project root to inspect
        #[arg(long, env = "INIT_CWD")]
        project_dir: Option<PathBuf>,

        /// Template source directory override
        #[arg(long)]
        templates_dir: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Install {
            all,
            select,
            project_dir,
            templates_dir,
        }) => {
            if let Err(e) = commands::install::run(
                all,
                select.as_deref(),
                project_dir.as_deref(),
                templates_dir.as_deref(),
            ) {
                eprintln!("Install error: {e}");
                std::process::exit(1);
            }
        }
        Some(Command::List {
            project_dir,
            templates_dir,
        }) => {
            if let Err(e) = commands::list::run(project_dir.as_deref(), templates_dir.as_deref()) {
                eprintln!("List error: {e}");
                std::process::exit(1);
            }
        }
        Some(Command::Doctor {
            project_dir,
            templates_dir,
        }) => {
            if let Err(e) = commands::doctor::run(project_dir.as_deref(), templates_dir.as_deref())
            {
                eprintln!("Doctor error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            // Default command: install (postinstall hooks pass no subcommand)
            if let Err(e) = commands::install::run(
                cli.all,
                cli.select.as_deref(),
                cli.project_dir.as_deref(),
                cli.templates_dir.as_deref(),
            ) {
                eprintln!("Install error: {e}");
                std::process::exit(1);
            }
        }
    }
}
