use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Records table (rows behind the scatter chart)
// ---------------------------------------------------------------------------

pub fn records_table(ui: &mut Ui, state: &AppState) {
    let rows = state.visible_rows();

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(240.0)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Launch Site");
            });
            header.col(|ui| {
                ui.strong("Payload Mass (kg)");
            });
            header.col(|ui| {
                ui.strong("class");
            });
            header.col(|ui| {
                ui.strong("Booster Version Category");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui| {
                    ui.label(rec.site.as_str());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(rec.outcome.to_string()).color(outcome_color(rec.outcome)),
                    );
                });
                row.col(|ui| {
                    ui.label(RichText::new(rec.booster_version_category.as_str()).color(
                        state.category_colors.color_for(&rec.booster_version_category),
                    ));
                });
            });
        });
}
