//! Build context extracted from an environment snapshot

use std::collections::HashMap;

use crate::config::EnvironmentConfig;
use crate::error::{CiVersionError, Result};

/// Snapshot of environment variables; absent keys are unset
pub type Environment = HashMap<String, String>;

const TAGS_PREFIX: &str = "refs/tags/";
const HEADS_PREFIX: &str = "refs/heads/";

/// Captures the current process environment.
///
/// Variables whose name or value is not valid unicode are skipped.
pub fn snapshot_process_env() -> Environment {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// The source-control ref that triggered a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    Branch(String),
    Tag(String),
}

/// Build context from CI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub ci: bool,
    pub source: Option<SourceRef>,
    pub build_number: Option<u64>,
}

/// Classification of a context, decides which resolution rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind<'a> {
    NotCi,
    TaggedRelease(&'a str),
    BranchBuild { branch: &'a str, build_number: u64 },
    Unresolvable,
}

impl Context {
    /// Extract a context using the default (GitHub Actions) variable names
    pub fn from_env(env: &Environment) -> Result<Self> {
        Self::from_env_with(env, &EnvironmentConfig::default())
    }

    /// Extract a context using the configured variable names
    ///
    /// Fails only when the run number is present but not a base-10 integer.
    pub fn from_env_with(env: &Environment, names: &EnvironmentConfig) -> Result<Self> {
        let source = non_empty(env, &names.git_ref).and_then(|git_ref| {
            if let Some(tag) = git_ref.strip_prefix(TAGS_PREFIX) {
                Some(SourceRef::Tag(tag.to_string()))
            } else if let Some(branch) = git_ref.strip_prefix(HEADS_PREFIX) {
                Some(SourceRef::Branch(branch.to_string()))
            } else {
                // Pull request: the ref is refs/pull/<n>/merge, head ref is the source branch
                non_empty(env, &names.head_ref).map(|head| SourceRef::Branch(head.clone()))
            }
        });

        let build_number = env
            .get(&names.run_number)
            .map(|raw| parse_build_number(raw))
            .transpose()?;

        Ok(Context {
            ci: non_empty(env, &names.ci).is_some(),
            source,
            build_number,
        })
    }

    pub fn branch(&self) -> Option<&str> {
        match &self.source {
            Some(SourceRef::Branch(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.source {
            Some(SourceRef::Tag(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn kind(&self) -> BuildKind<'_> {
        if !self.ci {
            return BuildKind::NotCi;
        }
        match (&self.source, self.build_number) {
            (Some(SourceRef::Tag(tag)), _) => BuildKind::TaggedRelease(tag.as_str()),
            (Some(SourceRef::Branch(branch)), Some(build_number)) => BuildKind::BranchBuild {
                branch: branch.as_str(),
                build_number,
            },
            _ => BuildKind::Unresolvable,
        }
    }
}

/// Empty variables count as unset
fn non_empty<'a>(env: &'a Environment, name: &str) -> Option<&'a String> {
    env.get(name).filter(|value| !value.is_empty())
}

fn parse_build_number(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CiVersionError::build_number(format!("Could not parse integer '{}'", raw)))
}
