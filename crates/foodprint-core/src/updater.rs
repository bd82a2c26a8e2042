//! # CO2 Updater
//!
//! Applies reference-table figures to every matching record of a catalog.
//!
//! A record is rewritten only when its stored `co2_per_kg` differs from the
//! reference total by more than [`CHANGE_TOLERANCE`]. Running the updater a
//! second time on its own output therefore changes nothing.

use chrono::NaiveDate;
use serde_json::Value;

use crate::emissions::{EmissionsEntry, DATA_SOURCE};
use crate::error::ShapeError;
use crate::matcher;
use crate::record::{keys, Catalog, ProductRecord};

/// Absolute difference below which a stored value counts as current.
///
/// Absorbs float noise in the catalog, not real changes in the data.
pub const CHANGE_TOLERANCE: f64 = 0.001;

/// What happened to a single matched record.
#[derive(Debug, Clone, PartialEq)]
enum RecordOutcome {
    /// Matched, but the record has no `regional_data` block.
    NoRegionalData,
    /// Matched and already within tolerance.
    Unchanged,
    /// Emissions fields were overwritten.
    Updated { old_co2: f64, new_co2: f64 },
}

/// One rewritten record, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Display name of the record.
    pub name: String,
    /// Reference product the name resolved to.
    pub canonical: &'static str,
    pub old_co2: f64,
    pub new_co2: f64,
}

/// Counters and change list from one pass over a catalog.
///
/// Records with no match or no `regional_data` count toward neither
/// `updated` nor `unchanged`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    pub updated: usize,
    pub unchanged: usize,
    /// Rewritten records, in catalog order.
    pub changes: Vec<Change>,
}

impl UpdateReport {
    /// Records counted as neither updated nor unchanged: no alias match, or
    /// no `regional_data` block.
    pub fn skipped(&self, total: usize) -> usize {
        total.saturating_sub(self.updated + self.unchanged)
    }
}

/// Update every record of `catalog` in place, stamping changes with `today`.
pub fn update(catalog: &mut Catalog, today: NaiveDate) -> UpdateReport {
    let mut report = UpdateReport::default();
    for record in catalog.records_mut() {
        let Some(found) = matcher::resolve(record.name()) else {
            tracing::trace!(name = record.name(), "no alias match");
            continue;
        };
        match apply_entry(record, found.entry, today) {
            RecordOutcome::Updated { old_co2, new_co2 } => {
                tracing::debug!(
                    name = record.name(),
                    canonical = found.canonical(),
                    old_co2,
                    new_co2,
                    "record updated"
                );
                report.updated += 1;
                report.changes.push(Change {
                    name: record.name().to_string(),
                    canonical: found.canonical(),
                    old_co2,
                    new_co2,
                });
            }
            RecordOutcome::Unchanged => report.unchanged += 1,
            RecordOutcome::NoRegionalData => {
                tracing::trace!(name = record.name(), "no regional_data, skipped");
            }
        }
    }
    tracing::debug!(
        updated = report.updated,
        unchanged = report.unchanged,
        total = catalog.len(),
        "update pass complete"
    );
    report
}

/// Check the `regional_data` shape of every record an alias matches.
///
/// Unmatched records are never read by [`update`] and are not checked, so
/// they may carry anything. Run this before [`update`] to reject a catalog
/// before any record changes.
pub fn check_matched(catalog: &Catalog) -> Result<(), ShapeError> {
    catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| matcher::resolve(r.name()).is_some())
        .try_for_each(|(index, r)| r.check_regional_data(index))
}

/// Overwrite the emissions fields of `record` with `entry` if they differ
/// by more than [`CHANGE_TOLERANCE`]. All four fields change together or
/// not at all.
fn apply_entry(
    record: &mut ProductRecord,
    entry: &EmissionsEntry,
    today: NaiveDate,
) -> RecordOutcome {
    let Some(regional) = record.regional_data_mut() else {
        return RecordOutcome::NoRegionalData;
    };
    let old_co2 = regional
        .get(keys::CO2_PER_KG)
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let new_co2 = entry.total;

    if (old_co2 - new_co2).abs() <= CHANGE_TOLERANCE {
        return RecordOutcome::Unchanged;
    }

    regional.insert(keys::CO2_PER_KG.to_string(), Value::from(new_co2));
    regional.insert(keys::CO2_BREAKDOWN.to_string(), entry.breakdown.to_json());
    regional.insert(keys::DATA_SOURCE.to_string(), Value::from(DATA_SOURCE));
    regional.insert(
        keys::LAST_UPDATED.to_string(),
        Value::from(today.format("%Y-%m-%d").to_string()),
    );
    RecordOutcome::Updated { old_co2, new_co2 }
}
