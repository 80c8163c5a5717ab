//! Schema inference module
//!
//! Classifies JSON values into the semantic column types used by table specs.
//!
//! # Features
//!
//! - **Type Detection**: number, text, datetime and array tags
//! - **First-Seen Wins**: a field keeps the type of its first observed value
//! - **Field Ordering**: fields are reported in the order they were first seen

mod inference;
mod types;

pub use inference::{detect_type, is_datetime, observe_record};
pub use types::{FieldSpec, FieldTypes, TypeTag};
