//! Score Gauge Main Application
//! Main window with control panel and dashboard viewer.
//!
//! Start-up and Reload both issue the two operations independently: one fetch
//! feeds the text targets, another feeds the gauge. Each is polled once per
//! frame and applied on the UI thread when it resolves.

use crate::config::DashboardConfig;
use crate::dashboard::{load_latest, plot_gauge, DashboardError};
use crate::data::{spawn_fetch, PendingFetch};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;

/// Main application window.
pub struct ScoreApp {
    config: DashboardConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    text_fetch: Option<PendingFetch>,
    gauge_fetch: Option<PendingFetch>,
}

impl ScoreApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(config.selection),
            chart_viewer: ChartViewer::new(&config.gauge_target),
            config,
            text_fetch: None,
            gauge_fetch: None,
        };
        app.refresh();
        app
    }

    fn is_loading(&self) -> bool {
        self.text_fetch.is_some() || self.gauge_fetch.is_some()
    }

    /// Trigger both operations against the current source.
    fn refresh(&mut self) {
        tracing::info!(source = %self.config.source.display(), "refreshing dashboard");
        self.text_fetch = Some(spawn_fetch(&self.config.source));
        self.gauge_fetch = Some(spawn_fetch(&self.config.source));
        self.control_panel.is_loading = true;
        self.control_panel.set_status("Loading score file...");
    }

    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.config.source = path;
            self.refresh();
        }
    }

    fn report(&mut self, result: Result<String, DashboardError>) {
        match result {
            Ok(status) => self.control_panel.set_status(status),
            Err(error) => {
                tracing::warn!(%error, "dashboard update failed");
                self.control_panel.set_error(format!("Error: {error}"));
            }
        }
    }

    /// Apply the text fetch once it resolves.
    fn check_text_fetch(&mut self) {
        let Some(pending) = self.text_fetch.take() else {
            return;
        };
        let Some(result) = pending.try_take() else {
            self.text_fetch = Some(pending);
            return;
        };

        let selection = self.config.selection;
        let outcome = result
            .map_err(DashboardError::from)
            .and_then(|table| load_latest(&table, selection, &mut self.chart_viewer.targets))
            .map(|record| format!("Latest score from {}", record.date));
        self.report(outcome);
    }

    /// Apply the gauge fetch once it resolves.
    fn check_gauge_fetch(&mut self) {
        let Some(pending) = self.gauge_fetch.take() else {
            return;
        };
        let Some(result) = pending.try_take() else {
            self.gauge_fetch = Some(pending);
            return;
        };

        let selection = self.config.selection;
        let viewer = &mut self.chart_viewer;
        let outcome = result.map_err(DashboardError::from).and_then(|table| {
            viewer.history = table.current_scores();
            plot_gauge(&table, selection, &mut viewer.gauge)
                .map(|_| format!("Loaded {} rows", table.len()))
        });
        self.report(outcome);
    }
}

impl eframe::App for ScoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_text_fetch();
        self.check_gauge_fetch();
        self.control_panel.is_loading = self.is_loading();

        if self.is_loading() {
            ctx.request_repaint();
        }

        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui, &self.config.source);
                match action {
                    ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                    ControlPanelAction::Reload => self.refresh(),
                    ControlPanelAction::SelectionChanged => {
                        self.config.selection = self.control_panel.selection;
                        self.refresh();
                    }
                    ControlPanelAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open the dashboard window.
pub fn run(config: DashboardConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Score Gauge"),
        ..Default::default()
    };

    eframe::run_native(
        "Score Gauge",
        options,
        Box::new(move |cc| Ok(Box::new(ScoreApp::new(cc, config)))),
    )
}
