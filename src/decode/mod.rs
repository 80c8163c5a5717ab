//! Input decoding module
//!
//! Supports: JSON, JSONL, YAML, TSV, log lines
//!
//! # Overview
//!
//! Turns raw input into a JSON tree, locates the record list inside it and
//! flattens individual records into dotted-key rows.

mod decoders;
mod flatten;
mod locator;
mod types;

pub use decoders::{decode_document, detect_format};
pub use flatten::{flatten_record, flatten_value};
pub use locator::{locate_records, CANDIDATE_KEYS};
pub use types::{InputFormat, SourceRoot};
