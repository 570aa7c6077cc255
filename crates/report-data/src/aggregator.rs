//! Streaming fold of prescription records into per-drug aggregates.

use std::collections::HashMap;

use report_core::models::{DrugAggregate, PrescriptionRecord, SummaryRow};

// ── DrugAggregator ────────────────────────────────────────────────────────────

/// Accumulates per-drug state as records stream in.
///
/// The aggregator has two states: accumulating (accepting [`fold`]) and
/// finalized. [`finalize`] consumes the aggregator, so folding after
/// finalization is unrepresentable rather than a runtime check.
///
/// [`fold`]: DrugAggregator::fold
/// [`finalize`]: DrugAggregator::finalize
#[derive(Debug, Default)]
pub struct DrugAggregator {
    drugs: HashMap<String, DrugAggregate>,
}

impl DrugAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporate one parsed record into the running state.
    ///
    /// Looks up or lazily creates the aggregate for the record's drug name,
    /// adds the prescriber identity to its set (idempotent), and adds the
    /// cost to its exact running total.
    pub fn fold(&mut self, record: PrescriptionRecord) {
        self.drugs
            .entry(record.drug_name)
            .or_default()
            .add(record.prescriber, record.cost);
    }

    /// Number of distinct drug names seen so far.
    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    /// Drain the accumulated state into the ordered output sequence.
    ///
    /// Rows are sorted by total cost descending with drug name ascending as
    /// the tie-break. Both keys together form a total order, so the result
    /// is deterministic.
    pub fn finalize(self) -> Vec<SummaryRow> {
        let mut rows: Vec<SummaryRow> = self
            .drugs
            .into_iter()
            .map(|(drug_name, aggregate)| SummaryRow {
                drug_name,
                num_prescriber: aggregate.prescriber_count(),
                total_cost: aggregate.total_cost,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total_cost
                .cmp(&a.total_cost)
                .then_with(|| a.drug_name.cmp(&b.drug_name))
        });
        rows
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
