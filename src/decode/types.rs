//! Decoder types
//!
//! Defines input formats and the record list selector.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// A single JSON document (default)
    #[default]
    Json,
    /// JSON Lines, one value per line
    Jsonl,
    /// YAML document
    Yaml,
    /// Tab-separated values with a header row
    Tsv,
    /// Log lines of `key=value` pairs or JSON objects
    Log,
}

impl InputFormat {
    /// Guess the format from a file extension.
    ///
    /// Returns `None` for extensions that say nothing about the content
    /// (`.txt`, none at all), leaving the choice to [`detect_format`].
    ///
    /// [`detect_format`]: super::detect_format
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(InputFormat::Json),
            Some("jsonl" | "ndjson") => Some(InputFormat::Jsonl),
            Some("yaml" | "yml") => Some(InputFormat::Yaml),
            Some("tsv" | "tab") => Some(InputFormat::Tsv),
            Some("log") => Some(InputFormat::Log),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputFormat::Json => "json",
            InputFormat::Jsonl => "jsonl",
            InputFormat::Yaml => "yaml",
            InputFormat::Tsv => "tsv",
            InputFormat::Log => "log",
        };
        f.write_str(name)
    }
}

/// Where the record list lives inside a payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceRoot {
    /// Heuristic search over well-known container keys
    #[default]
    Auto,
    /// Explicit dot-separated path of object keys
    Path(Vec<String>),
}

impl SourceRoot {
    /// Parse a selector. Empty, `auto` and `data` all select [`SourceRoot::Auto`].
    pub fn parse(selector: &str) -> Self {
        match selector {
            "" | "auto" | "data" => SourceRoot::Auto,
            path => SourceRoot::Path(path.split('.').map(str::to_string).collect()),
        }
    }

    /// Check whether this is heuristic mode
    pub fn is_auto(&self) -> bool {
        matches!(self, SourceRoot::Auto)
    }
}

impl From<&str> for SourceRoot {
    fn from(selector: &str) -> Self {
        Self::parse(selector)
    }
}

impl std::fmt::Display for SourceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRoot::Auto => f.write_str("auto"),
            SourceRoot::Path(parts) => f.write_str(&parts.join(".")),
        }
    }
}
