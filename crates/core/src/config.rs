//! Resolver configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! `RESPATH_*` environment variables. Command-line flags are applied on top
//! by the caller.

use crate::error::{Result, SourceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_MODE: &str = "RESPATH_MODE";
pub const ENV_DEV_ROOT: &str = "RESPATH_DEV_ROOT";
pub const ENV_SOURCE_PATH: &str = "RESPATH_SOURCE_PATH";

/// How embedded resources are looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Resources come from the table compiled into the host binary.
    Packaged,
    /// Resources come from a local build-output directory.
    #[default]
    Development,
}

impl FromStr for Mode {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "packaged" => Ok(Mode::Packaged),
            "development" | "dev" => Ok(Mode::Development),
            other => Err(SourceError::Config(format!("unknown mode '{other}'"))),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Packaged => write!(f, "packaged"),
            Mode::Development => write!(f, "development"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub mode: Mode,
    /// Build-output directory consulted for embedded names in development mode
    pub dev_root: PathBuf,
    /// Extension (without the dot) that marks a location as an archive
    pub archive_extension: String,
    /// Seed the registry with the current working directory
    pub seed_cwd: bool,
    /// Additional locations, registered after the working directory
    pub source_paths: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Development,
            dev_root: PathBuf::from("target"),
            archive_extension: "jar".to_string(),
            seed_cwd: true,
            source_paths: Vec::new(),
        }
    }
}

impl ResolverConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults, optionally overlaid by a JSON file, then by the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|key| std::env::var_os(key))
    }

    /// Apply `RESPATH_*` overrides read through `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.to_string_lossy().parse()?;
        }
        if let Some(root) = lookup(ENV_DEV_ROOT) {
            self.dev_root = PathBuf::from(root);
        }
        if let Some(paths) = lookup(ENV_SOURCE_PATH) {
            self.source_paths.extend(
                std::env::split_paths(&paths)
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_string_lossy().into_owned()),
            );
        }
        Ok(self)
    }
}
