use eframe::egui::{self, Color32, RichText};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

const HEADING_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
    pub title: String,
}

impl LaunchDashApp {
    pub fn new(state: AppState, title: String) -> Self {
        Self { state, title }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: controls and charts, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(RichText::new(&self.title).size(40.0).color(HEADING_COLOR));
                    });
                    ui.add_space(8.0);

                    panels::site_dropdown(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::pie_chart(ui, &self.state.pie);
                    ui.add_space(8.0);

                    panels::payload_slider(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::scatter_chart(ui, &self.state.scatter);
                    ui.add_space(8.0);

                    egui::CollapsingHeader::new("Launch records")
                        .default_open(false)
                        .show(ui, |ui| {
                            table::records_table(ui, &self.state);
                        });
                });
        });
    }
}
