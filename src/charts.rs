use eframe::egui::Color32;
use serde::{Serialize, Serializer};

use crate::color::{outcome_color, CategoryColors};
use crate::data::filter::{outcome_counts, payload_filter, PayloadRange, SiteFilter};
use crate::data::model::{LaunchTable, Outcome};

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Success (1) / Failure (0)";

fn serialize_color<S: Serializer>(color: &Color32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b()))
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub outcome: Outcome,
    pub count: usize,
    #[serde(serialize_with = "serialize_color")]
    pub color: Color32,
}

/// Renderer-independent description of the outcome pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    /// Largest slice first; equal counts keep failure before success.
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn build(table: &LaunchTable, site: &SiteFilter) -> Self {
        let mut slices: Vec<PieSlice> = outcome_counts(table, site)
            .into_iter()
            .map(|(outcome, count)| PieSlice {
                outcome,
                count,
                color: outcome_color(outcome),
            })
            .collect();
        // Stable sort, so ties stay in outcome order.
        slices.sort_by(|a, b| b.count.cmp(&a.count));

        PieFigure {
            title: format!("Total Success Launches for {site}"),
            slices,
        }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Cumulative `(start, end)` fractions of the full turn for each slice.
    pub fn spans(&self) -> Vec<(f64, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut start = 0.0;
        self.slices
            .iter()
            .map(|s| {
                let end = start + s.count as f64 / total as f64;
                let span = (start, end);
                start = end;
                span
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Points of one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    #[serde(serialize_with = "serialize_color")]
    pub color: Color32,
    /// `[payload, class]` pairs in table order.
    pub points: Vec<[f64; 2]>,
}

/// Renderer-independent description of the payload/outcome scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterFigure {
    pub fn build(
        table: &LaunchTable,
        site: &SiteFilter,
        range: PayloadRange,
        colors: &CategoryColors,
    ) -> Self {
        let rows = payload_filter(table.records(), site, range);

        let series = table
            .categories()
            .iter()
            .filter_map(|category| {
                let points: Vec<[f64; 2]> = rows
                    .iter()
                    .filter(|r| r.booster_version_category == *category)
                    .map(|r| [r.payload_mass_kg, f64::from(r.outcome.class())])
                    .collect();
                (!points.is_empty()).then(|| ScatterSeries {
                    category: category.clone(),
                    color: colors.color_for(category),
                    points,
                })
            })
            .collect();

        ScatterFigure {
            title: format!("Payload vs Success for {site}"),
            x_label: PAYLOAD_AXIS_LABEL.to_string(),
            y_label: OUTCOME_AXIS_LABEL.to_string(),
            series,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
