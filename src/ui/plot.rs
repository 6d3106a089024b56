use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::charts::{PieFigure, ScatterFigure};

const PIE_HEIGHT: f32 = 320.0;
const SCATTER_HEIGHT: f32 = 360.0;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Point on the unit circle for a fraction of the full turn, clockwise from 12 o'clock.
fn turn_point(fraction: f64, radius: f64) -> [f64; 2] {
    let angle = FRAC_PI_2 - fraction * TAU;
    [radius * angle.cos(), radius * angle.sin()]
}

/// Closed polygon outline (centre + arc) for a slice spanning `start..end`.
fn wedge(start: f64, end: f64) -> Vec<[f64; 2]> {
    let segments = ((end - start) * 96.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let t = start + (end - start) * i as f64 / segments as f64;
        points.push(turn_point(t, 1.0));
    }
    points
}

pub fn pie_chart(ui: &mut Ui, figure: &PieFigure) {
    ui.strong(figure.title.as_str());

    let total = figure.total();
    let spans = figure.spans();

    Plot::new("success-pie-chart")
        .height(PIE_HEIGHT)
        .data_aspect(1.0)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            if total == 0 {
                plot_ui.text(Text::new(PlotPoint::new(0.0, 0.0), "No launches"));
                return;
            }
            for (slice, &(start, end)) in figure.slices.iter().zip(spans.iter()) {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge(start, end)))
                        .fill_color(slice.color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(slice.outcome.to_string()),
                );

                let [x, y] = turn_point((start + end) / 2.0, 0.6);
                let percent = 100.0 * slice.count as f64 / total as f64;
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(format!("{percent:.1}%")).color(Color32::WHITE),
                ));
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

pub fn scatter_chart(ui: &mut Ui, figure: &ScatterFigure) {
    ui.strong(figure.title.as_str());

    Plot::new("success-payload-scatter-chart")
        .height(SCATTER_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &figure.series {
                plot_ui.points(
                    Points::new(PlotPoints::from(series.points.clone()))
                        .radius(5.0)
                        .color(series.color)
                        .name(&series.category),
                );
            }
        });
}
