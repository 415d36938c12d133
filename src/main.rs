use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ci_version::cli::{run_stamp_workflow, StampWorkflowArgs};
use ci_version::config;
use ci_version::domain::{snapshot_process_env, Environment};
use ci_version::{outputs, ui};

#[derive(clap::Parser, Debug)]
#[command(
    name = "ci-version",
    version,
    about = "Stamp a CI build version into a package manifest"
)]
struct Args {
    #[arg(short = 'C', long, help = "Run as if started in this directory")]
    working_directory: Option<PathBuf>,

    #[arg(short, long, help = "Manifest to read and update [default: package.json]")]
    manifest: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Resolve the version without writing anything")]
    dry_run: bool,

    #[arg(long, help = "Print the resolution as JSON")]
    json: bool,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,
}

/// Log level comes from `--debug`, then `RUST_LOG`, then defaults to info.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ci_version=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ci_version=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);
    tracing::debug!("ci-version starting with args: {:?}", args);

    let env = snapshot_process_env();
    match run(&args, &env) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            report_failure(&format!("{:#}", e), &env);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a version was resolved.
fn run(args: &Args, env: &Environment) -> Result<bool> {
    if let Some(dir) = &args.working_directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Cannot change directory to {}", dir.display()))?;
    }

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let workflow_args = StampWorkflowArgs {
        manifest_path: args.manifest.clone(),
        dry_run: args.dry_run,
    };
    let result = run_stamp_workflow(&workflow_args, &config, env)?;

    if args.json {
        println!("{}", serde_json::to_string(&result.resolution)?);
    }

    if !result.resolution.is_resolved() {
        let summary = ui::format_resolution(&result.resolution);
        report_failure(&summary, env);
        return Ok(false);
    }

    if !args.json {
        let summary = ui::format_resolution(&result.resolution);
        if result.written {
            ui::display_success(&format!(
                "Updated {} to {}",
                result.manifest_path.display(),
                summary
            ));
        } else {
            ui::display_status(&format!("Resolved version {}", summary));
        }
    }
    Ok(true)
}

fn report_failure(message: &str, env: &Environment) {
    ui::display_error(message);
    if env.get("GITHUB_ACTIONS").is_some_and(|v| !v.is_empty()) {
        println!("{}", outputs::error_annotation(message));
    }
}
