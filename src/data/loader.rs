use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchRecord, LaunchTable, Outcome};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, CATEGORY_COLUMN];

/// Schema violations found while reading a launch CSV.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("line {line}: payload {value} is negative")]
    NegativePayload { line: u64, value: f64 },
    #[error("line {line}: payload is not a finite number")]
    NonFinitePayload { line: u64 },
    #[error("line {line}: class {value} is not 0 or 1")]
    InvalidOutcome { line: u64, value: i64 },
}

/// Row layout as it appears in the file. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a launch table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// Parse a launch table from any CSV source with a header row.
pub fn load_reader<R: Read>(source: R) -> Result<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.context("reading CSV record")?;
        // 1-based file line, header included.
        let line = record.position().map_or(0, |p| p.line());
        let row: CsvRow = record
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV line {line}"))?;
        records.push(validate_row(row, line)?);
    }

    Ok(LaunchTable::from_records(records))
}

fn validate_row(row: CsvRow, line: u64) -> Result<LaunchRecord, LoadError> {
    if !row.payload_mass_kg.is_finite() {
        return Err(LoadError::NonFinitePayload { line });
    }
    if row.payload_mass_kg < 0.0 {
        return Err(LoadError::NegativePayload {
            line,
            value: row.payload_mass_kg,
        });
    }
    let outcome = Outcome::from_class(row.class).ok_or(LoadError::InvalidOutcome {
        line,
        value: row.class,
    })?;

    Ok(LaunchRecord {
        site: row.site,
        payload_mass_kg: row.payload_mass_kg,
        outcome,
        booster_version_category: row.booster_version_category,
    })
}
