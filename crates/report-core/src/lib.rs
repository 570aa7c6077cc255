//! Core types for the pharmacy report tool.
//!
//! Holds the data model shared by the parsing and aggregation layers, the
//! error taxonomy, and the output formatting helpers.

pub mod error;
pub mod formatting;
pub mod models;
