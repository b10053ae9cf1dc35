//! Packing configuration.
//!
//! Selects a packer implementation from TOML (or YAML) without code
//! changes.
//!
//! # Examples
//!
//! ```
//! use packsmith_solver::{PackerConfig, PackerKind};
//!
//! let config = PackerConfig::from_toml_str(r#"
//!     packer = "recursive"
//! "#).unwrap();
//! assert_eq!(config.packer, PackerKind::Recursive);
//! ```
//!
//! Use the defaults when the file is missing:
//!
//! ```
//! use packsmith_solver::PackerConfig;
//!
//! let config = PackerConfig::load("packsmith.toml").unwrap_or_default();
//! // Proceeds with the branch-and-bound packer if the file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use packsmith_core::Inventory;

use crate::branch_bound::BranchAndBoundPacker;
use crate::packer::Packer;
use crate::recursive::RecursivePacker;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Which packer implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackerKind {
    /// Exhaustive include/exclude recursion.
    Recursive,
    /// Best-first search with relaxation-bound pruning.
    #[default]
    BranchAndBound,
}

impl fmt::Display for PackerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackerKind::Recursive => write!(f, "Recursive"),
            PackerKind::BranchAndBound => write!(f, "BranchAndBound"),
        }
    }
}

/// Packer selection configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PackerConfig {
    /// The packer implementation to use.
    #[serde(default)]
    pub packer: PackerKind,
}

impl PackerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the packer kind.
    pub fn with_packer(mut self, packer: PackerKind) -> Self {
        self.packer = packer;
        self
    }

    /// Builds the configured packer over the given inventory.
    pub fn build(&self, inventory: Inventory) -> Box<dyn Packer> {
        match self.packer {
            PackerKind::Recursive => Box::new(RecursivePacker::new(inventory)),
            PackerKind::BranchAndBound => Box::new(BranchAndBoundPacker::new(inventory)),
        }
    }
}
