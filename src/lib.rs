// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tabspec
//!
//! Infers a tabular structure (a master table plus related child tables) from
//! an arbitrary, loosely-structured JSON payload and emits a declarative spec
//! for a downstream ingestion process.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabspec::{generate_spec, SpecOptions};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "result": [
//!         {"id": 1, "items": [{"sku": "A", "qty": 2}]}
//!     ]
//! });
//!
//! let spec = generate_spec(&payload, &SpecOptions::default());
//!
//! // tables[0] = master (id, items), tables[1] = items child table (sku, qty)
//! assert_eq!(spec.tables.len(), 2);
//! assert_eq!(spec.tables[1].key, "items");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 SpecBuilder (spec::generate_spec)            │
//! └──────────────────────────────────────────────────────────────┘
//!        │                      │                       │
//! ┌──────┴───────┐   ┌──────────┴──────────┐   ┌────────┴────────┐
//! │   Locate     │   │      Analyze        │   │    Assemble     │
//! ├──────────────┤   ├─────────────────────┤   ├─────────────────┤
//! │ auto keys    │   │ sample ≤200         │   │ master table    │
//! │ dotted path  │   │ flatten (decode)    │   │ child tables    │
//! │ fallback     │   │ detect type(schema) │   │ envelope        │
//! └──────────────┘   └─────────────────────┘   └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Spec generation options and server settings
pub mod config;

/// Semantic type detection
pub mod schema;

/// Input decoding, record location and flattening
pub mod decode;

/// Record structure analysis
pub mod analyze;

/// Spec document model and builder
pub mod spec;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use analyze::{MergeStrategy, StructureAnalyzer};
pub use config::SpecOptions;
pub use schema::{FieldSpec, TypeTag};
pub use spec::{generate_spec, RecordSource, Spec, SpecBuilder, TableSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
