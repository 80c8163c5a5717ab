//! CLI commands and argument parsing

use crate::analyze::MergeStrategy;
use crate::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::decode::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer master/child table ingestion specs from JSON payloads
#[derive(Parser, Debug)]
#[command(name = "tabspec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a spec from a payload file
    Generate {
        /// Payload file, or `-` for stdin
        input: PathBuf,

        /// Input format (guessed from the extension, then the content, when omitted)
        #[arg(long)]
        input_format: Option<InputFormat>,

        /// Options file (YAML or JSON); flags below override it
        #[arg(long)]
        options: Option<PathBuf>,

        /// Entity label
        #[arg(short, long)]
        entity: Option<String>,

        /// Record list selector: auto, data, or a dot-separated path
        #[arg(short, long)]
        source_root: Option<String>,

        /// Master field merge strategy
        #[arg(short, long)]
        merge_strategy: Option<MergeStrategy>,

        /// Field to always emit as a child table (repeatable, comma-separated)
        #[arg(long = "force-child", value_delimiter = ',')]
        force_child: Vec<String>,
    },

    /// Show where the record list is found in a payload
    Locate {
        /// Payload file, or `-` for stdin
        input: PathBuf,

        /// Input format (guessed from the extension, then the content, when omitted)
        #[arg(long)]
        input_format: Option<InputFormat>,

        /// Record list selector: auto, data, or a dot-separated path
        #[arg(short, long, default_value = "auto")]
        source_root: String,
    },

    /// Start HTTP server mode
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on a single line
    Json,
    /// Indented JSON
    Pretty,
    /// YAML document
    Yaml,
}
