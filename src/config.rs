//! Configuration types
//!
//! Options controlling spec generation, loadable from a YAML or JSON file,
//! and the HTTP server bind settings.

use crate::analyze::MergeStrategy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// ============================================================================
// Spec Options
// ============================================================================

/// Default entity label
pub const DEFAULT_ENTITY: &str = "order";

/// Default record list selector
pub const DEFAULT_SOURCE_ROOT: &str = "auto";

/// Options for a single spec generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecOptions {
    /// Kind of data being mapped
    #[serde(default = "default_entity")]
    pub entity: String,

    /// Record list selector: `auto`, `data`, empty, or a dot-separated path
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// Master field selection policy
    #[serde(default)]
    pub merge_strategy: MergeStrategy,

    /// Field names that always become child tables
    #[serde(default)]
    pub force_child_tables: Vec<String>,
}

fn default_entity() -> String {
    DEFAULT_ENTITY.to_string()
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

impl Default for SpecOptions {
    fn default() -> Self {
        Self {
            entity: default_entity(),
            source_root: default_source_root(),
            merge_strategy: MergeStrategy::default(),
            force_child_tables: Vec::new(),
        }
    }
}

impl SpecOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entity label
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = entity.into();
        self
    }

    /// Set the record list selector
    #[must_use]
    pub fn with_source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = source_root.into();
        self
    }

    /// Set the merge strategy
    #[must_use]
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Add a forced child table name
    #[must_use]
    pub fn with_forced_child(mut self, name: impl Into<String>) -> Self {
        self.force_child_tables.push(name.into());
        self
    }

    /// Parse options from YAML (or JSON, which YAML accepts)
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load options from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

// ============================================================================
// Server Config
// ============================================================================

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// HTTP server bind settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create a config for the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve the socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| Error::config(format!("Invalid host '{}': {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
