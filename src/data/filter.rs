use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchRecord, LaunchTable, Outcome};

/// Dropdown value meaning "no site restriction".
pub const ALL_SITES: &str = "All";

/// Range slider step in kilograms.
pub const PAYLOAD_STEP: i64 = 1000;

// ---------------------------------------------------------------------------
// Site predicate
// ---------------------------------------------------------------------------

/// The dropdown selection: every site, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Interpret a dropdown value. Only the exact sentinel means "all".
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "{ALL_SITES}"),
            SiteFilter::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dropdown options
// ---------------------------------------------------------------------------

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    fn same(text: &str) -> Self {
        SiteOption {
            label: text.to_string(),
            value: text.to_string(),
        }
    }
}

/// `"All"` followed by every distinct site in first-seen order.
pub fn site_options(table: &LaunchTable) -> Vec<SiteOption> {
    std::iter::once(SiteOption::same(ALL_SITES))
        .chain(table.sites().iter().map(|s| SiteOption::same(s)))
        .collect()
}

/// Options whose label contains `query`, ignoring case. A blank query keeps all.
pub fn matching_options<'a>(options: &'a [SiteOption], query: &str) -> Vec<&'a SiteOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|opt| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Outcome aggregation (pie chart)
// ---------------------------------------------------------------------------

/// Count launches per outcome for the selected site.
///
/// Outcomes with no launches are absent from the map rather than zero.
pub fn outcome_counts(table: &LaunchTable, site: &SiteFilter) -> BTreeMap<Outcome, usize> {
    let mut counts = BTreeMap::new();
    for rec in table.records().iter().filter(|r| site.matches(r)) {
        *counts.entry(rec.outcome).or_insert(0) += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Payload filter (scatter chart)
// ---------------------------------------------------------------------------

/// Inclusive payload interval selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// The full slider span for a table.
    pub fn full(table: &LaunchTable) -> Self {
        let (min, max) = table.payload_bounds();
        PayloadRange::new(min as f64, max as f64)
    }

    /// Inclusive on both ends. An inverted range contains nothing.
    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }
}

/// Rows at the selected site whose payload lies in `range`, in table order.
pub fn payload_filter<'a>(
    records: &'a [LaunchRecord],
    site: &SiteFilter,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| site.matches(r) && range.contains(r.payload_mass_kg))
        .collect()
}

// ---------------------------------------------------------------------------
// Slider geometry
// ---------------------------------------------------------------------------

/// Tick marks at `min, min + step, …` not exceeding `max`.
pub fn slider_marks(min: i64, max: i64) -> Vec<i64> {
    if max < min {
        return Vec::new();
    }
    (min..=max).step_by(PAYLOAD_STEP as usize).collect()
}

/// Snap a raw slider value onto the `min + k * step` grid, clamped to the bounds.
/// `max` is always reachable even when it is off the grid.
pub fn snap_to_step(value: f64, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    let clamped = value.clamp(min as f64, max as f64);
    if clamped >= max as f64 {
        return max;
    }
    let last = min + (max - min) / PAYLOAD_STEP * PAYLOAD_STEP;
    let steps = ((clamped - min as f64) / PAYLOAD_STEP as f64).round() as i64;
    let snapped = (min + steps * PAYLOAD_STEP).min(last);
    // Off-grid max competes with the nearest grid point.
    if last != max && (max as f64 - clamped) < (clamped - snapped as f64).abs() {
        max
    } else {
        snapped
    }
}

#[cfg(test)]
mod tests {
    use crate::data::model::fixtures::*;
    use super::*;

    fn site(s: &str) -> SiteFilter {
        SiteFilter::from_value(s)
    }

    #[test]
    fn options_start_with_all_then_sites() {
        let labels: Vec<_> = site_options(&small_table())
            .into_iter()
            .map(|o| (o.label, o.value))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("All".to_string(), "All".to_string()),
                ("A".to_string(), "A".to_string()),
                ("B".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn empty_table_only_offers_all() {
        let opts = site_options(&LaunchTable::default());
        assert_eq!(opts, vec![SiteOption::same("All")]);
    }

    #[test]
    fn option_search_is_case_insensitive() {
        let table = LaunchTable::from_records(vec![
            record("CCAFS LC-40", 1.0, 1, "x"),
            record("KSC LC-39A", 1.0, 1, "x"),
            record("CCAFS SLC-40", 1.0, 1, "x"),
        ]);
        let opts = site_options(&table);

        let hits: Vec<_> = matching_options(&opts, "ccafs")
            .into_iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(hits, ["CCAFS LC-40", "CCAFS SLC-40"]);

        assert_eq!(matching_options(&opts, "  ").len(), 4);
        assert!(matching_options(&opts, "vandenberg").is_empty());
    }

    #[test]
    fn all_sentinel_is_exact() {
        assert_eq!(site("All"), SiteFilter::All);
        assert_eq!(site("all"), SiteFilter::Site("all".into()));
        assert_eq!(SiteFilter::Site("KSC".into()).to_string(), "KSC");
    }

    #[test]
    fn counts_for_all_sites() {
        let counts = outcome_counts(&small_table(), &SiteFilter::All);
        assert_eq!(counts.get(&Outcome::Success), Some(&2));
        assert_eq!(counts.get(&Outcome::Failure), Some(&1));
    }

    #[test]
    fn counts_omit_missing_outcomes() {
        let counts = outcome_counts(&small_table(), &site("B"));
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&Outcome::Success), Some(&1));
        assert!(!counts.contains_key(&Outcome::Failure));
    }

    #[test]
    fn counts_sum_to_matching_rows() {
        let table = small_table();
        for s in ["All", "A", "B", "C"] {
            let filter = site(s);
            let total: usize = outcome_counts(&table, &filter).values().sum();
            let expected = table.records().iter().filter(|r| filter.matches(r)).count();
            assert_eq!(total, expected, "site {s}");
        }
    }

    #[test]
    fn unknown_site_yields_nothing() {
        let table = small_table();
        assert!(outcome_counts(&table, &site("C")).is_empty());
        let rows = payload_filter(table.records(), &site("C"), PayloadRange::full(&table));
        assert!(rows.is_empty());
    }

    #[test]
    fn payload_filter_example() {
        let table = small_table();
        let rows = payload_filter(table.records(), &site("A"), PayloadRange::new(0.0, 1000.0));
        assert_eq!(rows, vec![&record("A", 500.0, 1, "v1.0")]);
    }

    #[test]
    fn payload_bounds_are_inclusive() {
        let table = small_table();
        let rows = payload_filter(table.records(), &SiteFilter::All, PayloadRange::new(500.0, 1000.0));
        let payloads: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, [500.0, 1000.0]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let table = small_table();
        let rows = payload_filter(table.records(), &SiteFilter::All, PayloadRange::new(1500.0, 500.0));
        assert!(rows.is_empty());
    }

    #[test]
    fn payload_filter_keeps_order_and_is_idempotent() {
        let table = LaunchTable::from_records(vec![
            record("A", 900.0, 0, "x"),
            record("B", 100.0, 1, "x"),
            record("A", 300.0, 1, "y"),
            record("A", 5000.0, 1, "y"),
            record("A", 600.0, 0, "x"),
        ]);
        let filter = site("A");
        let range = PayloadRange::new(200.0, 1000.0);

        let once: Vec<LaunchRecord> = payload_filter(table.records(), &filter, range)
            .into_iter()
            .cloned()
            .collect();
        let payloads: Vec<f64> = once.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, [900.0, 300.0, 600.0]);

        for r in &once {
            assert!(filter.matches(r) && range.contains(r.payload_mass_kg));
        }

        let twice: Vec<LaunchRecord> = payload_filter(&once, &filter, range)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn marks_follow_step_from_min() {
        assert_eq!(slider_marks(500, 1500), [500, 1500]);
        assert_eq!(slider_marks(0, 2500), [0, 1000, 2000]);
        assert_eq!(slider_marks(0, 0), [0]);
        assert!(slider_marks(10, 5).is_empty());
    }

    #[test]
    fn snapping_stays_on_grid_or_max() {
        assert_eq!(snap_to_step(1400.0, 0, 9600), 1000);
        assert_eq!(snap_to_step(1600.0, 0, 9600), 2000);
        assert_eq!(snap_to_step(-50.0, 0, 9600), 0);
        assert_eq!(snap_to_step(9600.0, 0, 9600), 9600);
        assert_eq!(snap_to_step(9550.0, 0, 9600), 9600);
        assert_eq!(snap_to_step(9200.0, 0, 9600), 9000);
        assert_eq!(snap_to_step(9400.0, 0, 9600), 9600);
        assert_eq!(snap_to_step(1300.0, 500, 1500), 1500);
        assert_eq!(snap_to_step(12_000.0, 0, 9600), 9600);
        assert_eq!(snap_to_step(700.0, 500, 500), 500);
    }
}
