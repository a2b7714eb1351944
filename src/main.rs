use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::cli::{
    run_changelog_workflow, ChangelogWorkflowArgs, HistoryLocation, OutputFormat,
};
use git_changelog::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a versioned changelog from [Release]/[Breaking]/[Feature]/[Bug] commit tags"
)]
struct Args {
    #[arg(short, long, help = "Path inside the repository to read", default_value = ".")]
    path: PathBuf,

    #[arg(short, long, conflicts_with = "path", help = "Clone and read a remote repository instead")]
    url: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Write the changelog to a file instead of stdout")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let location = match args.url {
        Some(url) => HistoryLocation::Url(url),
        None => HistoryLocation::Path(args.path),
    };

    let workflow_args = ChangelogWorkflowArgs {
        location,
        format: args.format,
        output: args.output.clone(),
    };

    let result = run_changelog_workflow(workflow_args, &config)
        .context("Failed to generate changelog")?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    match &args.output {
        Some(path) => {
            ui::display_summary(&result.changelog);
            ui::display_success(&format!("Changelog written to {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
