use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the pharmacy report pipeline.
///
/// Every variant is fatal: this is a single-pass batch tool with no
/// transient dependency to retry against.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The header line does not name one of the required columns.
    #[error("Input header is missing required column '{name}'")]
    MissingColumn { name: &'static str },

    /// A data line has fewer fields than the header requires.
    #[error("Malformed record on line {line_no}: {content}")]
    MalformedRow { line_no: u64, content: String },

    /// The cost field of a data line is not a non-negative decimal number.
    #[error("Invalid drug cost on line {line_no}: {content}")]
    InvalidCost { line_no: u64, content: String },

    /// The input stream contained no header line at all.
    #[error("Input is empty: no header line found")]
    EmptyInput,

    /// The input file could not be opened.
    #[error("Failed to open input {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[error("Failed to create output {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for raw I/O errors hit while streaming lines.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
