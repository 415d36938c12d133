//! Main workflow orchestration logic
//!
//! Reads the manifest, extracts the build context from an environment
//! snapshot, resolves the version and stamps it. Taking the snapshot as a
//! parameter keeps the workflow callable without touching process state.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::Config;
use crate::domain::{Context, Environment, Resolution};
use crate::manifest::Manifest;
use crate::outputs::{self, OutputSink};
use crate::resolver;

/// Arguments for the stamp workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StampWorkflowArgs {
    /// Manifest path, overriding the configured one
    pub manifest_path: Option<String>,

    /// Resolve and report without writing the manifest or outputs
    pub dry_run: bool,
}

/// Result of a completed workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Resolved version, or the reason none could be resolved
    pub resolution: Resolution,

    /// The manifest that was read
    pub manifest_path: PathBuf,

    /// Whether the manifest was rewritten
    pub written: bool,

    /// Whether step outputs were written
    pub outputs_written: bool,
}

/// Stamp workflow
///
/// 1. Load the manifest and read its base version
/// 2. Extract the build context from `env`
/// 3. Resolve the version
/// 4. On success, write the manifest and step outputs (skipped on dry run)
///
/// An unresolved outcome is returned in [`WorkflowResult::resolution`] and
/// leaves the manifest untouched. Malformed input (manifest, base version,
/// build number) is an error.
pub fn run_stamp_workflow(
    args: &StampWorkflowArgs,
    config: &Config,
    env: &Environment,
) -> Result<WorkflowResult> {
    let manifest_path = PathBuf::from(
        args.manifest_path
            .as_deref()
            .unwrap_or(&config.manifest.path),
    );

    let mut manifest = Manifest::load(&manifest_path)?;
    let base_version = manifest.version()?.to_string();

    let context = Context::from_env_with(env, &config.environment)
        .context("Failed to read the CI environment")?;
    tracing::debug!(?context, "extracted build context");

    let resolution = resolver::resolve(&base_version, &context)
        .with_context(|| format!("Invalid version in {}", manifest_path.display()))?;

    let mut result = WorkflowResult {
        resolution,
        manifest_path,
        written: false,
        outputs_written: false,
    };

    let Some(version) = result.resolution.version() else {
        tracing::warn!(error = ?result.resolution.error(), "no version resolved");
        return Ok(result);
    };

    if args.dry_run {
        tracing::info!(%version, "dry run, manifest and step outputs left unchanged");
        return Ok(result);
    }

    // Open the output file first so a bad path fails before the manifest changes
    let output_file = if config.behavior.emit_outputs {
        OutputSink::from_env(env, &config.environment)
            .open()
            .context("Failed to open step outputs")?
    } else {
        None
    };

    tracing::info!(%version, "updating package version");
    manifest.set_version(version);
    manifest
        .save(&result.manifest_path)
        .with_context(|| format!("Failed to write {}", result.manifest_path.display()))?;
    result.written = true;

    if let Some(file) = output_file {
        file.write(&outputs::resolution_outputs(&result.resolution))
            .context("Failed to write step outputs")?;
        result.outputs_written = true;
    }

    Ok(result)
}
