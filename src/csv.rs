use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::model::{FieldEdit, Segment};
use crate::tco::Summary;

/// Errors that can occur when reading edit files or writing summaries
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open edits file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("failed to write summary: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush summary: {0}")]
    Flush(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    field: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    duration: i64,
    km: String,
    segment: Segment,
    business: bool,
    purchase_tco: String,
    rental_tco: String,
    difference: String,
    cost_per_km_purchase: Option<String>,
    cost_per_km_rental: Option<String>,
}

/// Read form edits (`field,value` rows) from a csv file
pub fn read_edits(
    path: &Path,
) -> Result<impl Iterator<Item = Result<FieldEdit, CsvError>> + use<>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(edits_from(reader))
}

fn edits_from<R: io::Read>(
    reader: csv::Reader<R>,
) -> impl Iterator<Item = Result<FieldEdit, CsvError>> {
    reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            Ok(FieldEdit::new(row.field, row.value))
        })
}

/// Write the summary as a single csv row, cost per km left empty when unavailable
pub fn write_summary(writer: impl io::Write, summary: &Summary) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.serialize(OutputRow {
        duration: summary.duration.months(),
        km: summary.km.to_fixed(0),
        segment: summary.segment,
        business: summary.is_business,
        purchase_tco: summary.purchase.to_fixed(2),
        rental_tco: summary.rental.to_fixed(2),
        difference: summary.difference.to_fixed(2),
        cost_per_km_purchase: summary.cost_per_km_purchase.ok().map(|v| v.to_fixed(3)),
        cost_per_km_rental: summary.cost_per_km_rental.ok().map(|v| v.to_fixed(3)),
    })?;
    writer.flush()?;
    Ok(())
}
