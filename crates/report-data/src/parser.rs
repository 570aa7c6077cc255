//! Quote-aware line splitting and per-line record parsing.
//!
//! A delimiter inside a double-quoted field is field content, not a
//! separator. The splitter is a small explicit state machine rather than a
//! regex: toggle an in-quote flag on every `"` and split only while outside
//! quotes.

use report_core::error::{ReportError, Result};
use report_core::models::{
    HeaderIndex, PrescriptionRecord, COL_DRUG_COST, COL_DRUG_NAME, COL_FIRST_NAME, COL_LAST_NAME,
    IDENTITY_SEPARATOR,
};
use rust_decimal::Decimal;

// ── Splitting ─────────────────────────────────────────────────────────────────

/// Split `line` on `delimiter`, treating delimiters inside double-quoted
/// fields as content.
///
/// Quote characters are retained in the returned field values; the emission
/// side re-quotes values that need it.
pub fn split_delimited(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            fields.push(&line[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    fields.push(&line[start..]);
    fields
}

// ── Header resolution ─────────────────────────────────────────────────────────

/// Resolve the positions of the four required columns from the header line.
///
/// Header names are matched case-insensitively after trimming. A missing
/// column is a structural error naming the absent column.
pub fn resolve_header(line: &str, delimiter: char) -> Result<HeaderIndex> {
    let names: Vec<String> = split_delimited(line, delimiter)
        .into_iter()
        .map(|field| field.trim().to_ascii_lowercase())
        .collect();

    let position = |name: &'static str| -> Result<usize> {
        names
            .iter()
            .position(|candidate| candidate == name)
            .ok_or(ReportError::MissingColumn { name })
    };

    Ok(HeaderIndex {
        drug_name: position(COL_DRUG_NAME)?,
        first_name: position(COL_FIRST_NAME)?,
        last_name: position(COL_LAST_NAME)?,
        cost: position(COL_DRUG_COST)?,
    })
}

// ── Record parsing ────────────────────────────────────────────────────────────

/// Parse one data line into a [`PrescriptionRecord`].
///
/// Returns `Ok(None)` for an empty or whitespace-only line; the aggregator
/// treats that as a no-op, not a failure. A line missing a required column or
/// carrying a non-numeric / negative cost is fatal for the whole run.
pub fn parse_record(
    line: &str,
    columns: &HeaderIndex,
    delimiter: char,
    line_no: u64,
) -> Result<Option<PrescriptionRecord>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields = split_delimited(line, delimiter);
    let field = |index: usize| -> Result<&str> {
        fields
            .get(index)
            .map(|value| value.trim())
            .ok_or_else(|| ReportError::MalformedRow {
                line_no,
                content: line.to_string(),
            })
    };

    let drug_name = field(columns.drug_name)?.to_string();
    let first_name = field(columns.first_name)?;
    let last_name = field(columns.last_name)?;
    let raw_cost = field(columns.cost)?;

    let cost: Decimal = raw_cost.parse().map_err(|_| ReportError::InvalidCost {
        line_no,
        content: line.to_string(),
    })?;
    if cost < Decimal::ZERO {
        return Err(ReportError::InvalidCost {
            line_no,
            content: line.to_string(),
        });
    }

    Ok(Some(PrescriptionRecord {
        drug_name,
        prescriber: format!("{first_name}{IDENTITY_SEPARATOR}{last_name}"),
        cost,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
