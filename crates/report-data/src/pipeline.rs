//! End-to-end summarization: header resolution, fold loop, sorted emission.

use std::io::{BufRead, Write};

use tracing::debug;

use report_core::error::{ReportError, Result};
use report_core::formatting::{format_cost, quote_if_needed};

use crate::aggregator::DrugAggregator;
use crate::parser::{parse_record, resolve_header};

/// Consume a delimited prescription log from `reader` and write the per-drug
/// summary to `writer`.
///
/// The first line must be a header naming the four required columns; every
/// subsequent line is folded into the running per-drug state. Nothing is
/// written until the whole input has been consumed and sorted, so a fatal
/// parse error leaves no partially-complete report behind. The writer is
/// flushed before returning.
pub fn summarize<R: BufRead, W: Write>(reader: R, mut writer: W, delimiter: char) -> Result<()> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(ReportError::EmptyInput),
    };
    let columns = resolve_header(&header, delimiter)?;

    let mut aggregator = DrugAggregator::new();
    let mut records_folded = 0u64;

    // Data lines start at line 2; line 1 is the header.
    for (offset, line) in lines.enumerate() {
        let line = line?;
        let line_no = offset as u64 + 2;
        if let Some(record) = parse_record(&line, &columns, delimiter, line_no)? {
            aggregator.fold(record);
            records_folded += 1;
        }
    }

    debug!(
        "Folded {} records into {} distinct drugs",
        records_folded,
        aggregator.len()
    );

    writeln!(
        writer,
        "drug_name{0}num_prescriber{0}total_cost",
        delimiter
    )?;
    for row in aggregator.finalize() {
        writeln!(
            writer,
            "{name}{d}{count}{d}{cost}",
            name = quote_if_needed(&row.drug_name, delimiter),
            d = delimiter,
            count = row.num_prescriber,
            cost = format_cost(row.total_cost),
        )?;
    }
    writer.flush()?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> Result<String> {
        let mut output = Vec::new();
        summarize(Cursor::new(input), &mut output, ',')?;
        Ok(String::from_utf8(output).unwrap())
    }

    // ── Whole-pipeline scenarios ──────────────────────────────────────────────

    #[test]
    fn test_summarize_reference_scenario() {
        let input = "\
id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost
1000000001,Smith,James,AMBIEN,100
1000000002,Garcia,Maria,AMBIEN,200
1000000003,Johnson,James,CHLORPROMAZINE,1000
1000000004,Rodriguez,Maria,CHLORPROMAZINE,2000
1000000005,Smith,David,BENZTROPINE MESYLATE,1500
";
        let expected = "\
drug_name,num_prescriber,total_cost
CHLORPROMAZINE,2,3000
BENZTROPINE MESYLATE,1,1500
AMBIEN,2,300
";
        assert_eq!(run(input).unwrap(), expected);
    }

    #[test]
    fn test_summarize_same_name_two_ids_counts_once() {
        let input = "\
id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost
1000000001,Smith,James,AMBIEN,100
2000000002,Smith,James,AMBIEN,250.50
";
        let output = run(input).unwrap();
        assert!(output.contains("AMBIEN,1,350.5"));
    }

    #[test]
    fn test_summarize_whole_number_totals_have_no_fraction() {
        let input = "\
id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost
1,Smith,James,AMBIEN,150.25
2,Garcia,Maria,AMBIEN,149.75
";
        let output = run(input).unwrap();
        assert!(output.contains("AMBIEN,2,300\n"), "output was: {output}");
    }

    #[test]
    fn test_summarize_skips_blank_lines() {
        let input = "\
id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost
1,Smith,James,AMBIEN,100

2,Garcia,Maria,AMBIEN,200
";
        let output = run(input).unwrap();
        assert!(output.contains("AMBIEN,2,300"));
    }

    #[test]
    fn test_summarize_quoted_drug_name_round_trips() {
        let input = "\
id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost
1,Smith,James,\"AMOXICILLIN, 500MG\",10
";
        let output = run(input).unwrap();
        // The parsed value keeps its quotes and contains the delimiter, so
        // emission wraps it again.
        assert!(output.contains("\"\"AMOXICILLIN, 500MG\"\",1,10"));
    }

    #[test]
    fn test_summarize_header_only_input_emits_only_header() {
        let output = run("id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost\n")
            .unwrap();
        assert_eq!(output, "drug_name,num_prescriber,total_cost\n");
    }

    #[test]
    fn test_summarize_reordered_header_columns() {
        let input = "\
drug_cost,drug_name,prescriber_first_name,prescriber_last_name
100,AMBIEN,James,Smith
";
        let output = run(input).unwrap();
        assert!(output.contains("AMBIEN,1,100"));
    }

    // ── Failure modes ─────────────────────────────────────────────────────────

    #[test]
    fn test_summarize_empty_input_is_an_error() {
        assert!(matches!(run("").unwrap_err(), ReportError::EmptyInput));
    }

    #[test]
    fn test_summarize_missing_column_is_fatal() {
        let err = run("id,prescriber_last_name,drug_name,drug_cost\n").unwrap_err();
        match err {
            ReportError::MissingColumn { name } => {
                assert_eq!(name, "prescriber_first_name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summarize_bad_cost_writes_nothing() {
        let input = "\
id,prescriber_last_name,prescriber_first_name,drug_name,drug_cost
1,Smith,James,AMBIEN,100
2,Garcia,Maria,AMBIEN,not-a-number
";
        let mut output = Vec::new();
        let err = summarize(Cursor::new(input), &mut output, ',').unwrap_err();
        assert!(matches!(err, ReportError::InvalidCost { line_no: 3, .. }));
        // Aggregation failed before emission started.
        assert!(output.is_empty());
    }

    #[test]
    fn test_summarize_custom_delimiter() {
        let input = "\
id;prescriber_last_name;prescriber_first_name;drug_name;drug_cost
1;Smith;James;AMBIEN;100
";
        let mut output = Vec::new();
        summarize(Cursor::new(input), &mut output, ';').unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "drug_name;num_prescriber;total_cost\nAMBIEN;1;100\n"
        );
    }
}
