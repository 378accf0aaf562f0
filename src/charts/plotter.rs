//! Chart Plotter Module
//! Draws the gauge with the egui painter and the score history with egui_plot.

use crate::charts::{DeltaDirection, GaugeGeometry, GaugeSpec, AXIS_RANGE};
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};
use egui_plot::{HLine, Line, Plot, PlotPoints, Points};

pub const TRACK_COLOR: Color32 = Color32::from_rgb(229, 236, 246);
pub const BAR_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
pub const INCREASING_COLOR: Color32 = Color32::from_rgb(61, 153, 112);
pub const DECREASING_COLOR: Color32 = Color32::from_rgb(255, 65, 54);

/// Interactive-window counterparts of the static renderer.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Paint a gauge at its layout size.
    pub fn draw_gauge(ui: &mut egui::Ui, spec: &GaugeSpec) {
        let size = egui::vec2(spec.layout.width as f32, spec.layout.height as f32);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        let g = GaugeGeometry::for_spec(spec);
        let to_screen =
            |(x, y): (f64, f64)| Pos2::new(rect.min.x + x as f32, rect.min.y + y as f32);
        let text_color = ui.visuals().text_color();

        let stroke_width = g.thickness() as f32;
        let track: Vec<Pos2> = g.arc(0.0, 1.0, g.mid_radius()).into_iter().map(to_screen).collect();
        painter.add(Shape::line(track, Stroke::new(stroke_width, TRACK_COLOR)));

        if let Some(fraction) = g.fraction(spec.value).filter(|f| *f > 0.0) {
            let bar: Vec<Pos2> = g
                .arc(0.0, fraction, g.mid_radius())
                .into_iter()
                .map(to_screen)
                .collect();
            painter.add(Shape::line(bar, Stroke::new(stroke_width, BAR_COLOR)));
        }

        painter.text(
            to_screen(g.title_pos),
            Align2::CENTER_TOP,
            &spec.title.text,
            FontId::proportional(18.0),
            text_color,
        );
        painter.text(
            to_screen(g.number_pos),
            Align2::CENTER_BOTTOM,
            spec.number_text(),
            FontId::proportional(40.0),
            text_color,
        );

        let delta = spec.delta_text();
        if !delta.is_empty() {
            let color = match spec.delta_direction() {
                DeltaDirection::Increasing => INCREASING_COLOR,
                DeltaDirection::Decreasing => DECREASING_COLOR,
                DeltaDirection::Unchanged => text_color,
            };
            painter.text(
                to_screen(g.delta_pos),
                Align2::CENTER_TOP,
                delta,
                FontId::proportional(20.0),
                color,
            );
        }
    }

    /// Plot points for a score history. Row index on x; `NaN` rows are skipped.
    pub fn history_points(scores: &[f64]) -> Vec<[f64; 2]> {
        scores
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }

    /// Draw the score history line with the zero baseline.
    pub fn draw_history(ui: &mut egui::Ui, scores: &[f64]) {
        let points = Self::history_points(scores);

        Plot::new("score_history")
            .height(160.0)
            .allow_scroll(false)
            .x_axis_label("Row")
            .y_axis_label("Score")
            .include_y(AXIS_RANGE[0])
            .include_y(AXIS_RANGE[1])
            .show(ui, |plot_ui| {
                plot_ui.hline(HLine::new(0.0).color(Color32::GRAY));
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .color(BAR_COLOR)
                        .width(1.5)
                        .name("current_score"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .radius(3.0)
                        .color(BAR_COLOR),
                );
            });
    }
}
