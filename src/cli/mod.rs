//! CLI module
//!
//! Command-line interface and HTTP transport for spec generation.
//!
//! # Commands
//!
//! - `generate` - Infer a spec from a payload file
//! - `locate` - Show where the record list is found
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{apply_overrides, read_input, render, Runner};
pub use server::{build_router, serve, SpecRequest, MAX_BODY_BYTES};
