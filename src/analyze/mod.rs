//! Structure analysis module
//!
//! Samples a record list, flattens each record into a master row, infers
//! field types and collects nested object arrays as child tables.
//!
//! Sampling is bounded: at most [`MAX_SAMPLE_RECORDS`] records are examined,
//! at most [`MAX_CHILD_ELEMENTS_PER_RECORD`] child elements are taken from
//! each record, and at most [`MAX_CHILD_ROWS`] rows are kept per child table.

mod analyzer;
mod types;

pub use analyzer::{analyze_structure, StructureAnalyzer};
pub use types::{
    ChildTable, MergeStrategy, StructureAnalysis, MAX_CHILD_ELEMENTS_PER_RECORD, MAX_CHILD_ROWS,
    MAX_SAMPLE_RECORDS,
};
