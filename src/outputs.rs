//! CI step outputs and failure annotations (GitHub Actions workflow commands)

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::config::EnvironmentConfig;
use crate::domain::{Environment, Resolution};
use crate::error::Result;

/// Appends `name=value` step outputs to the file CI hands us
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSink {
    path: Option<PathBuf>,
}

impl OutputSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        OutputSink { path }
    }

    /// Sink for the output file named in the environment, if any
    pub fn from_env(env: &Environment, names: &EnvironmentConfig) -> Self {
        Self::new(
            env.get(&names.output)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        )
    }

    /// Open the output file for appending, `None` when there is none
    ///
    /// Opening up front lets callers fail before making other changes.
    pub fn open(&self) -> Result<Option<OutputFile>> {
        let Some(path) = &self.path else {
            tracing::debug!("no output file configured, skipping step outputs");
            return Ok(None);
        };

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Some(OutputFile {
            file,
            path: path.clone(),
        }))
    }

    /// Append outputs; returns `false` when there is no output file
    pub fn write(&self, outputs: &[(String, String)]) -> Result<bool> {
        match self.open()? {
            Some(file) => {
                file.write(outputs)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// An opened output file
#[derive(Debug)]
pub struct OutputFile {
    file: File,
    path: PathBuf,
}

impl OutputFile {
    pub fn write(mut self, outputs: &[(String, String)]) -> Result<()> {
        for (name, value) in outputs {
            writeln!(self.file, "{}={}", name, value)?;
        }
        tracing::debug!(count = outputs.len(), path = %self.path.display(), "wrote step outputs");
        Ok(())
    }
}

/// Step outputs for a resolution: `version` and, when present, `dist-tag`
pub fn resolution_outputs(resolution: &Resolution) -> Vec<(String, String)> {
    let mut outputs = Vec::new();

    if let Some(version) = resolution.version() {
        outputs.push(("version".to_string(), version.to_string()));
    }

    if let Some(dist_tag) = resolution.dist_tag() {
        outputs.push(("dist-tag".to_string(), dist_tag.to_string()));
    }

    outputs
}

/// Failure annotation marking the CI step as failed
pub fn error_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", escaped)
}
