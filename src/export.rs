use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::charts::{PieFigure, ScatterFigure};
use crate::state::AppState;

/// Snapshot of what the dashboard currently shows.
#[derive(Debug, Serialize)]
pub struct ViewExport<'a> {
    pub site: String,
    pub payload_range: [f64; 2],
    pub pie: &'a PieFigure,
    pub scatter: &'a ScatterFigure,
}

impl<'a> ViewExport<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        ViewExport {
            site: state.site.to_string(),
            payload_range: [state.payload.low, state.payload.high],
            pie: &state.pie,
            scatter: &state.scatter,
        }
    }
}

pub fn to_json(state: &AppState) -> Result<String> {
    serde_json::to_string_pretty(&ViewExport::from_state(state)).context("serializing view")
}

/// Write the current view as pretty JSON.
pub fn write_view(path: &Path, state: &AppState) -> Result<()> {
    let json = to_json(state)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::small_table;

    #[test]
    fn export_reflects_current_controls() {
        let mut state = AppState::new(small_table());
        state.select_site("A");

        let value: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        assert_eq!(value["site"], "A");
        assert_eq!(value["payload_range"][0], 500.0);
        assert_eq!(value["payload_range"][1], 1500.0);
        assert_eq!(value["pie"]["title"], "Total Success Launches for A");
        assert_eq!(value["scatter"]["series"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let state = AppState::new(small_table());
        assert!(write_view(Path::new("/nonexistent/dir/view.json"), &state).is_err());
    }
}
