mod bootstrap;
mod settings;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Result;
use clap::Parser;

use report_core::error::ReportError;
use report_data::pipeline::summarize;
use settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;
    tracing::info!("pharmacy-report v{} starting", env!("CARGO_PKG_VERSION"));

    run(&settings)?;

    tracing::info!("Report written to {}", settings.output.display());
    Ok(())
}

/// Open the input and output streams and drive the summarization pipeline.
///
/// Both streams are acquired up front; the output is flushed inside the
/// pipeline and closed on every exit path when the handles drop. On a fatal
/// parse error nothing has been written, so no partially-complete report is
/// left looking finished.
fn run(settings: &Settings) -> Result<(), ReportError> {
    let input = File::open(&settings.input).map_err(|source| ReportError::FileRead {
        path: settings.input.clone(),
        source,
    })?;
    let output = File::create(&settings.output).map_err(|source| ReportError::FileWrite {
        path: settings.output.clone(),
        source,
    })?;

    let reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);

    summarize(reader, &mut writer, settings.delimiter)?;
    writer.flush()?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
