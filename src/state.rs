use std::fmt;

use crate::charts::{PieFigure, ScatterFigure};
use crate::color::CategoryColors;
use crate::data::filter::{
    payload_filter, site_options, snap_to_step, PayloadRange, SiteFilter, SiteOption,
};
use crate::data::model::{LaunchRecord, LaunchTable};

// ---------------------------------------------------------------------------
// Controls, charts and their bindings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    SuccessPie,
    PayloadScatter,
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        })
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartId::SuccessPie => "success-pie-chart",
            ChartId::PayloadScatter => "success-payload-scatter-chart",
        })
    }
}

/// Which charts are recomputed when a control changes.
const BINDINGS: &[(ControlId, ChartId)] = &[
    (ControlId::SiteDropdown, ChartId::SuccessPie),
    (ControlId::SiteDropdown, ChartId::PayloadScatter),
    (ControlId::PayloadSlider, ChartId::PayloadScatter),
];

pub fn bound_charts(control: ControlId) -> Vec<ChartId> {
    BINDINGS
        .iter()
        .filter(|(c, _)| *c == control)
        .map(|(_, chart)| *chart)
        .collect()
}

/// A new value emitted by one of the controls.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Site(SiteFilter),
    Payload(PayloadRange),
}

impl ControlChange {
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Site(_) => ControlId::SiteDropdown,
            ControlChange::Payload(_) => ControlId::PayloadSlider,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub table: LaunchTable,

    /// Dropdown entries, "All" first.
    pub options: Vec<SiteOption>,

    /// Current dropdown value.
    pub site: SiteFilter,

    /// Current slider value.
    pub payload: PayloadRange,

    /// Text typed into the dropdown search box.
    pub site_query: String,

    /// Stable booster category colours.
    pub category_colors: CategoryColors,

    pub pie: PieFigure,
    pub scatter: ScatterFigure,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: LaunchTable) -> Self {
        let site = SiteFilter::All;
        let payload = PayloadRange::full(&table);
        let category_colors = CategoryColors::new(table.categories());
        let pie = PieFigure::build(&table, &site);
        let scatter = ScatterFigure::build(&table, &site, payload, &category_colors);

        Self {
            options: site_options(&table),
            table,
            site,
            payload,
            site_query: String::new(),
            category_colors,
            pie,
            scatter,
            status_message: None,
        }
    }

    /// Apply a control change and recompute every chart bound to that control.
    ///
    /// Returns the charts that were recomputed.
    pub fn dispatch(&mut self, change: ControlChange) -> Vec<ChartId> {
        let control = change.control();
        match change {
            ControlChange::Site(site) => self.site = site,
            ControlChange::Payload(range) => self.payload = range,
        }

        let charts = bound_charts(control);
        for chart in &charts {
            self.recompute(*chart);
        }
        log::debug!(
            "{control} → {}",
            charts
                .iter()
                .map(ChartId::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        charts
    }

    fn recompute(&mut self, chart: ChartId) {
        match chart {
            ChartId::SuccessPie => self.pie = PieFigure::build(&self.table, &self.site),
            ChartId::PayloadScatter => {
                self.scatter = ScatterFigure::build(
                    &self.table,
                    &self.site,
                    self.payload,
                    &self.category_colors,
                )
            }
        }
    }

    /// Select a site by its dropdown value.
    pub fn select_site(&mut self, value: &str) -> Vec<ChartId> {
        self.dispatch(ControlChange::Site(SiteFilter::from_value(value)))
    }

    /// Move the slider handles; raw values are snapped to the slider grid.
    ///
    /// Handles never cross: a handle dragged past the other stops on it, and
    /// if both moved the pair is reordered.
    pub fn set_payload_handles(&mut self, low: f64, high: f64) -> Vec<ChartId> {
        let (min, max) = self.table.payload_bounds();
        let mut low = snap_to_step(low, min, max) as f64;
        let mut high = snap_to_step(high, min, max) as f64;
        if low > high {
            if high == self.payload.high {
                low = high;
            } else if low == self.payload.low {
                high = low;
            } else {
                std::mem::swap(&mut low, &mut high);
            }
        }
        self.dispatch(ControlChange::Payload(PayloadRange::new(low, high)))
    }

    /// Rows currently shown in the scatter chart.
    pub fn visible_rows(&self) -> Vec<&LaunchRecord> {
        payload_filter(self.table.records(), &self.site, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::*;

    #[test]
    fn initial_state_shows_everything() {
        let state = AppState::new(small_table());
        assert_eq!(state.site, SiteFilter::All);
        assert_eq!(state.payload, PayloadRange::new(500.0, 1500.0));
        assert_eq!(state.options.len(), 3);
        assert_eq!(state.pie.total(), 3);
        assert_eq!(state.scatter.point_count(), 3);
    }

    #[test]
    fn bindings_match_layout() {
        assert_eq!(
            bound_charts(ControlId::SiteDropdown),
            [ChartId::SuccessPie, ChartId::PayloadScatter]
        );
        assert_eq!(bound_charts(ControlId::PayloadSlider), [ChartId::PayloadScatter]);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut state = AppState::new(small_table());
        let charts = state.select_site("B");
        assert_eq!(charts, [ChartId::SuccessPie, ChartId::PayloadScatter]);
        assert_eq!(state.pie.title, "Total Success Launches for B");
        assert_eq!(state.pie.total(), 1);
        assert_eq!(state.scatter.title, "Payload vs Success for B");
        assert_eq!(state.scatter.point_count(), 1);
    }

    #[test]
    fn slider_change_leaves_pie_alone() {
        let mut state = AppState::new(small_table());
        let pie_before = state.pie.clone();

        let charts = state.dispatch(ControlChange::Payload(PayloadRange::new(900.0, 1100.0)));
        assert_eq!(charts, [ChartId::PayloadScatter]);
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.point_count(), 1);
        assert_eq!(state.visible_rows()[0].site, "B");
    }

    #[test]
    fn same_value_still_recomputes() {
        let mut state = AppState::new(small_table());
        let charts = state.select_site("All");
        assert_eq!(charts.len(), 2);
    }

    #[test]
    fn slider_handles_snap_to_grid() {
        let mut state = AppState::new(small_table());
        state.set_payload_handles(620.0, 1499.0);
        assert_eq!(state.payload, PayloadRange::new(500.0, 1500.0));
    }

    #[test]
    fn dragged_handles_never_cross() {
        let table = LaunchTable::from_records(vec![
            record("A", 0.0, 1, "x"),
            record("A", 2000.0, 0, "x"),
            record("B", 5000.0, 1, "y"),
        ]);
        let mut state = AppState::new(table);

        state.set_payload_handles(1000.0, 2000.0);
        assert_eq!(state.payload, PayloadRange::new(1000.0, 2000.0));

        // Lower handle dragged past the upper one stops on it.
        state.set_payload_handles(4000.0, 2000.0);
        assert_eq!(state.payload, PayloadRange::new(2000.0, 2000.0));
        assert_eq!(state.visible_rows().len(), 1);

        // Upper handle dragged below the lower one stops on it.
        state.set_payload_handles(2000.0, 0.0);
        assert_eq!(state.payload, PayloadRange::new(2000.0, 2000.0));

        // Both moved at once: reordered.
        state.set_payload_handles(5000.0, 1000.0);
        assert_eq!(state.payload, PayloadRange::new(1000.0, 5000.0));
        assert!(state.payload.low <= state.payload.high);
        assert_eq!(state.scatter.point_count(), 2);
    }

    #[test]
    fn unknown_site_renders_empty_charts() {
        let mut state = AppState::new(small_table());
        state.select_site("Boca Chica");
        assert!(state.pie.slices.is_empty());
        assert!(state.scatter.series.is_empty());
    }
}
