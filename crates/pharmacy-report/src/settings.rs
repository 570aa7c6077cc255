use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise a prescription log into per-drug prescriber counts and costs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pharmacy-report",
    about = "Summarise a prescription log into per-drug prescriber counts and costs",
    version
)]
pub struct Settings {
    /// Path of the delimited prescription log to read
    pub input: PathBuf,

    /// Path the summary report is written to
    pub output: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}
