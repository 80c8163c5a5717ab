//! Spec generation module
//!
//! Assembles the declarative ingestion spec: one master table over the located
//! records plus one child table per nested object array.

mod builder;
mod types;

pub use builder::{generate_spec, SpecBuilder};
pub use types::{
    RecordSource, Spec, TableSpec, DEFAULT_APP_TOKEN_KEY, DEFAULT_UNIQUE_KEY, MASTER_TABLE_KEY,
    MASTER_TABLE_NAME, SPEC_VERSION,
};

#[cfg(test)]
mod tests;
