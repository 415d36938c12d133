//! Reading and stamping the `version` field of a JSON package manifest

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{CiVersionError, Result};

const VERSION_KEY: &str = "version";

/// A JSON manifest (e.g. `package.json`), key order preserved
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Parse a manifest from JSON text; the document root must be an object
    pub fn parse(contents: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(contents)? {
            Value::Object(fields) => Ok(Manifest { fields }),
            _ => Err(CiVersionError::manifest("Manifest root must be a JSON object")),
        }
    }

    /// Load a manifest from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CiVersionError::manifest(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    /// The declared version
    pub fn version(&self) -> Result<&str> {
        match self.fields.get(VERSION_KEY) {
            Some(Value::String(version)) => Ok(version.as_str()),
            Some(_) => Err(CiVersionError::manifest("'version' must be a string")),
            None => Err(CiVersionError::manifest("Manifest has no 'version' field")),
        }
    }

    /// Replace the declared version, keeping its position among the keys
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.fields
            .insert(VERSION_KEY.to_string(), Value::String(version.into()));
    }

    /// Render as two-space indented JSON without a trailing newline
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    /// Write the manifest back to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
