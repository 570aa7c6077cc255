use rust_decimal::Decimal;
use std::collections::HashSet;

// ── Required columns ──────────────────────────────────────────────────────────

/// Header name of the drug name column.
pub const COL_DRUG_NAME: &str = "drug_name";
/// Header name of the prescriber first name column.
pub const COL_FIRST_NAME: &str = "prescriber_first_name";
/// Header name of the prescriber last name column.
pub const COL_LAST_NAME: &str = "prescriber_last_name";
/// Header name of the drug cost column.
pub const COL_DRUG_COST: &str = "drug_cost";

/// Separator joining first and last name into one prescriber identity.
///
/// Chosen because it is not expected to occur inside a name, so two distinct
/// (first, last) pairs can never collide after joining.
pub const IDENTITY_SEPARATOR: char = ':';

// ── HeaderIndex ───────────────────────────────────────────────────────────────

/// Column positions of the four required fields, resolved once from the
/// header line.
///
/// Columns are located by name (case-insensitive, whitespace-trimmed), not by
/// fixed position, so input files may order their columns freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    /// Index of the drug name column.
    pub drug_name: usize,
    /// Index of the prescriber first name column.
    pub first_name: usize,
    /// Index of the prescriber last name column.
    pub last_name: usize,
    /// Index of the drug cost column.
    pub cost: usize,
}

// ── PrescriptionRecord ────────────────────────────────────────────────────────

/// One parsed data line, consumed immediately by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionRecord {
    /// Trimmed drug name as read from the input.
    pub drug_name: String,
    /// Prescriber identity: first and last name joined with
    /// [`IDENTITY_SEPARATOR`], original casing and punctuation preserved.
    pub prescriber: String,
    /// Non-negative cost of the dispensed prescription.
    pub cost: Decimal,
}

// ── DrugAggregate ─────────────────────────────────────────────────────────────

/// Accumulated state for one distinct drug name.
#[derive(Debug, Clone, Default)]
pub struct DrugAggregate {
    /// Distinct prescriber identities seen for this drug.
    ///
    /// Uniqueness is by the combined first+last identity string, so two
    /// prescriber IDs sharing the same name collapse into one.
    pub prescribers: HashSet<String>,
    /// Exact running total of all costs attributed to this drug.
    pub total_cost: Decimal,
}

impl DrugAggregate {
    /// Fold one record's prescriber and cost into the aggregate.
    ///
    /// Inserting an already-seen prescriber identity is a no-op on the
    /// count; the cost is always added.
    pub fn add(&mut self, prescriber: String, cost: Decimal) {
        self.prescribers.insert(prescriber);
        self.total_cost += cost;
    }

    /// Number of distinct prescriber identities.
    pub fn prescriber_count(&self) -> usize {
        self.prescribers.len()
    }
}

// ── SummaryRow ────────────────────────────────────────────────────────────────

/// One output row, derived from a [`DrugAggregate`] at finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Drug name exactly as read from the input.
    pub drug_name: String,
    /// Count of distinct prescriber identities for this drug.
    pub num_prescriber: usize,
    /// Exact total cost attributed to this drug.
    pub total_cost: Decimal,
}
