//! Chart Viewer Widget
//! Central panel: the three text targets, the gauge target and the score history.

use crate::charts::{ChartPlotter, GaugeHost};
use crate::dashboard::DashboardTargets;
use egui::{RichText, ScrollArea};

const SECTION_SPACING: f32 = 15.0;

/// Display side of the dashboard. Owns the targets the operations write to.
pub struct ChartViewer {
    pub targets: DashboardTargets,
    pub gauge: GaugeHost,
    pub history: Vec<f64>,
}

impl ChartViewer {
    pub fn new(gauge_target: &str) -> Self {
        Self {
            targets: DashboardTargets::default(),
            gauge: GaugeHost::new(gauge_target),
            history: Vec::new(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .rounding(8.0)
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        egui::Grid::new("score_targets")
                            .num_columns(2)
                            .spacing([16.0, 6.0])
                            .show(ui, |ui| {
                                for target in self.targets.iter() {
                                    ui.label(RichText::new(target.name()).size(14.0).strong());
                                    ui.label(RichText::new(target.text().unwrap_or("-")).size(14.0));
                                    ui.end_row();
                                }
                            });
                    });

                ui.add_space(SECTION_SPACING);

                match self.gauge.current() {
                    Some(instance) => ChartPlotter::draw_gauge(ui, instance.spec()),
                    None => {
                        ui.label(RichText::new("No Data").size(20.0));
                    }
                }

                if self.history.len() > 1 {
                    ui.add_space(SECTION_SPACING);
                    ui.label(RichText::new("Score History").size(14.0).strong());
                    ChartPlotter::draw_history(ui, &self.history);
                }
            });
    }
}
