//! Ingestion and aggregation layer for the pharmacy report tool.
//!
//! Responsible for splitting delimited lines, resolving header columns,
//! folding records into per-drug aggregates, and running the end-to-end
//! summarization pipeline.

pub mod aggregator;
pub mod parser;
pub mod pipeline;

pub use report_core as core;
