//! CLI runner - executes commands

use crate::analyze::MergeStrategy;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ServerConfig, SpecOptions};
use crate::decode::{decode_document, detect_format, locate_records, InputFormat, SourceRoot};
use crate::error::{Error, Result, ResultExt};
use crate::spec::SpecBuilder;
use crate::types::JsonValue;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                input,
                input_format,
                options,
                entity,
                source_root,
                merge_strategy,
                force_child,
            } => {
                let mut opts = match options {
                    Some(path) => SpecOptions::from_file(path)?,
                    None => SpecOptions::default(),
                };
                apply_overrides(
                    &mut opts,
                    entity.as_deref(),
                    source_root.as_deref(),
                    *merge_strategy,
                    force_child,
                );
                self.generate(input, *input_format, opts)
            }
            Commands::Locate {
                input,
                input_format,
                source_root,
            } => self.locate(input, *input_format, source_root),
            Commands::Serve { host, port } => {
                let config = ServerConfig::new(host.clone(), *port);
                crate::cli::serve(config).await
            }
        }
    }

    /// Generate a spec for the payload at `input`
    fn generate(
        &self,
        input: &Path,
        input_format: Option<InputFormat>,
        options: SpecOptions,
    ) -> Result<()> {
        let payload = read_input(input, input_format)?;
        let spec = SpecBuilder::new(options).build(&payload);

        tracing::info!(
            entity = %spec.entity,
            tables = spec.tables.len(),
            "Generated spec"
        );

        self.emit(&spec)
    }

    /// Report where the record list was found
    fn locate(
        &self,
        input: &Path,
        input_format: Option<InputFormat>,
        source_root: &str,
    ) -> Result<()> {
        let payload = read_input(input, input_format)?;
        let selector = SourceRoot::parse(source_root);
        let records = locate_records(&payload, &selector);

        self.emit(&json!({
            "source_root": selector.to_string(),
            "count": records.len(),
            "first": records.first(),
        }))
    }

    /// Render `value` in the selected format to stdout or the output file
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = render(value, self.cli.format)?;

        match &self.cli.output {
            Some(path) => {
                fs::write(path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!("Wrote output to {}", path.display());
            }
            None => println!("{rendered}"),
        }

        Ok(())
    }
}

/// Apply CLI flag overrides on top of file-loaded options
pub fn apply_overrides(
    options: &mut SpecOptions,
    entity: Option<&str>,
    source_root: Option<&str>,
    merge_strategy: Option<MergeStrategy>,
    force_child: &[String],
) {
    if let Some(entity) = entity {
        options.entity = entity.to_string();
    }
    if let Some(source_root) = source_root {
        options.source_root = source_root.to_string();
    }
    if let Some(strategy) = merge_strategy {
        options.merge_strategy = strategy;
    }
    options
        .force_child_tables
        .extend(force_child.iter().filter(|s| !s.is_empty()).cloned());
}

/// Render a serializable value in the given output format
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}

/// Read and decode a payload from a file, or stdin when the path is `-`.
///
/// Without an explicit format, the file extension decides; stdin and
/// uninformative extensions fall back to sniffing the content.
pub fn read_input(path: &Path, format: Option<InputFormat>) -> Result<JsonValue> {
    let (body, by_extension) = if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        (body, None)
    } else {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        (fs::read_to_string(path)?, InputFormat::from_path(path))
    };

    let format = format
        .or(by_extension)
        .unwrap_or_else(|| detect_format(&body));
    tracing::debug!(%format, "Decoding input");

    decode_document(&body, format)
}
