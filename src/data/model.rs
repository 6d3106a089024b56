use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as recorded in the `class` column (0 = failure, 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map the raw `class` value, `None` for anything outside {0, 1}.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class value, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Only used to group and colour scatter points.
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table with values derived once at load time.
///
/// Never mutated after construction; a new file produces a new table.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct sites in first-encountered order.
    sites: Vec<String>,
    /// Distinct booster categories in first-encountered order.
    categories: Vec<String>,
    /// Integer slider bounds: floor of the smallest payload, ceil of the largest.
    payload_bounds: (i64, i64),
}

impl LaunchTable {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut categories: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !categories.contains(&rec.booster_version_category) {
                categories.push(rec.booster_version_category.clone());
            }
        }

        let payload_bounds = if records.is_empty() {
            (0, 0)
        } else {
            let min = records
                .iter()
                .map(|r| r.payload_mass_kg)
                .fold(f64::INFINITY, f64::min);
            let max = records
                .iter()
                .map(|r| r.payload_mass_kg)
                .fold(f64::NEG_INFINITY, f64::max);
            (min.floor() as i64, max.ceil() as i64)
        };

        LaunchTable {
            records,
            sites,
            categories,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// `(min, max)` integer payload bounds for the range slider.
    pub fn payload_bounds(&self) -> (i64, i64) {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
