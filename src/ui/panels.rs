use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{matching_options, slider_marks};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Searchable site selector. Picking an entry dispatches a site change.
pub fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let selected = state.site.to_string();
    let mut picked: Option<String> = None;

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(&selected)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_query)
                    .hint_text("Select a Launch Site"),
            );
            let hits = matching_options(&state.options, &state.site_query);
            if hits.is_empty() {
                ui.weak("No matching sites");
            }
            for opt in hits {
                if ui.selectable_label(opt.value == selected, &opt.label).clicked() {
                    picked = Some(opt.value.clone());
                }
            }
        });

    if let Some(value) = picked {
        state.site_query.clear();
        state.select_site(&value);
    }
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

const MARK_FONT_SIZE: f32 = 10.0;

/// Horizontal offset of each mark along a rail `width` wide spanning `min..=max`.
pub fn mark_offsets(marks: &[i64], min: i64, max: i64, width: f32) -> Vec<(i64, f32)> {
    let span = (max - min) as f32;
    marks
        .iter()
        .map(|&m| {
            let offset = if span > 0.0 { (m - min) as f32 * width / span } else { 0.0 };
            (m, offset)
        })
        .collect()
}

/// Two-handle payload range with tick marks every step.
///
/// Both handles share the full rail; [`AppState::set_payload_handles`] keeps them ordered.
pub fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let (min, max) = state.table.payload_bounds();
    let mut low = state.payload.low;
    let mut high = state.payload.high;

    ui.label("Payload range (Kg):");
    ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(120.0);

    let from = ui.add(egui::Slider::new(&mut low, min as f64..=max as f64).text("from"));
    let to = ui.add(egui::Slider::new(&mut high, min as f64..=max as f64).text("to"));
    let changed = from.changed() || to.changed();
    let rail = to.rect;

    // Marks sit under the full-span rail, inset by the handle radius like egui's slider.
    let handle_radius = rail.height() / 2.5;
    let rail_left = rail.left() + handle_radius;
    let rail_width = ui.spacing().slider_width - 2.0 * handle_radius;
    let (marks_rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), MARK_FONT_SIZE + 4.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    for (mark, offset) in mark_offsets(&slider_marks(min, max), min, max, rail_width) {
        painter.text(
            egui::pos2(rail_left + offset, marks_rect.top()),
            egui::Align2::CENTER_TOP,
            mark.to_string(),
            egui::FontId::proportional(MARK_FONT_SIZE),
            ui.visuals().weak_text_color(),
        );
    }

    if changed {
        state.set_payload_handles(low, high);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export view…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in range",
            state.table.len(),
            state.scatter.point_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export dashboard view")
        .set_file_name("launch_view.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match crate::export::write_view(&path, state) {
            Ok(()) => {
                log::info!("Exported view to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::warn!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
