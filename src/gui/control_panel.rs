//! Control Panel Widget
//! Left side panel with the score file source and refresh controls.

use crate::data::RowSelection;
use egui::{Color32, ComboBox, RichText};
use std::path::Path;

/// Actions that can be triggered from the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Reload,
    SelectionChanged,
}

/// Left side control panel with file selection and status.
pub struct ControlPanel {
    pub selection: RowSelection,
    pub status: String,
    pub is_error: bool,
    pub is_loading: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            selection: RowSelection::default(),
            status: "Ready".to_string(),
            is_error: false,
            is_loading: false,
        }
    }
}

impl ControlPanel {
    pub fn new(selection: RowSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.is_error = false;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.status = error.into();
        self.is_error = true;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, source: &Path) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Score Gauge")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Source Section =====
        ui.label(RichText::new("Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let file_name = source
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| source.display().to_string());
                ui.label(RichText::new(file_name).size(12.0))
                    .on_hover_text(source.display().to_string());

                ui.horizontal(|ui| {
                    if ui.button("Browse").clicked() {
                        action = ControlPanelAction::BrowseCsv;
                    }
                    let reload = ui.add_enabled(!self.is_loading, egui::Button::new("Reload"));
                    if reload.clicked() {
                        action = ControlPanelAction::Reload;
                    }
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Row Selection Section =====
        ui.label(RichText::new("Latest Row").size(14.0).strong());
        ui.add_space(5.0);

        let before = self.selection;
        ComboBox::from_id_salt("row_selection")
            .selected_text(match self.selection {
                RowSelection::First => "First row",
                RowSelection::LatestDate => "Latest date",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.selection, RowSelection::First, "First row");
                ui.selectable_value(&mut self.selection, RowSelection::LatestDate, "Latest date");
            });
        if self.selection != before {
            action = ControlPanelAction::SelectionChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        ui.horizontal(|ui| {
            if self.is_loading {
                ui.spinner();
            }
            let color = if self.is_error {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(12.0).color(color));
        });

        action
    }
}
