//! CSV batch import: one establishment per row, header cells are attribute
//! names. Empty cells are left out of the record so they read as missing.

use std::io::Read;

use tracing::{info, warn};

use crate::classification::{ClassificationError, ClassificationResult, ClassificationService};
use crate::domains::{Domain, RegulatoryLabel};
use crate::record::{EncodingError, RawAttributeRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    /// Line in the source file, header included.
    pub line: u64,
    pub record: RawAttributeRecord,
}

pub fn parse_records<R: Read>(reader: R) -> Result<Vec<BatchRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let row = result?;
        let line = row
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);
        let record = headers
            .iter()
            .zip(row.iter())
            .filter(|(name, cell)| !name.is_empty() && !cell.is_empty())
            .fold(RawAttributeRecord::new(), |record, (name, cell)| {
                record.with(name, cell)
            });
        rows.push(BatchRow { line, record });
    }

    Ok(rows)
}

#[derive(Debug)]
pub struct RowOutcome {
    pub line: u64,
    pub rule_label: Result<RegulatoryLabel, EncodingError>,
    pub prediction: Option<Result<ClassificationResult, ClassificationError>>,
}

impl RowOutcome {
    pub fn is_ok(&self) -> bool {
        self.rule_label.is_ok() && !matches!(self.prediction, Some(Err(_)))
    }

    /// `Some(true)` when the model agrees with the rule cascade.
    pub fn agrees(&self) -> Option<bool> {
        match (&self.rule_label, &self.prediction) {
            (Ok(label), Some(Ok(result))) => Some(*label == result.label),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub failed: usize,
    pub compared: usize,
    pub agreeing: usize,
}

/// Runs every row through the rule cascade and, when a service is given,
/// through the model. A failing row never stops the batch.
pub fn evaluate(
    domain: Domain,
    rows: &[BatchRow],
    service: Option<&ClassificationService>,
) -> Vec<RowOutcome> {
    rows.iter()
        .map(|row| {
            let rule_label = domain.derive_label(&row.record);
            let prediction = service.map(|service| service.classify(domain, &row.record));
            let outcome = RowOutcome {
                line: row.line,
                rule_label,
                prediction,
            };
            if let Err(err) = &outcome.rule_label {
                warn!(domain = %domain, line = row.line, error = %err, "row rejected");
            }
            outcome
        })
        .collect()
}

pub fn summarize(domain: Domain, outcomes: &[RowOutcome]) -> BatchSummary {
    let summary = outcomes
        .iter()
        .fold(BatchSummary::default(), |mut summary, outcome| {
            summary.rows += 1;
            if !outcome.is_ok() {
                summary.failed += 1;
            }
            if let Some(agrees) = outcome.agrees() {
                summary.compared += 1;
                if agrees {
                    summary.agreeing += 1;
                }
            }
            summary
        });

    info!(
        domain = %domain,
        rows = summary.rows,
        failed = summary.failed,
        agreeing = summary.agreeing,
        "batch evaluated"
    );
    summary
}
