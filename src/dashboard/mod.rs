//! Dashboard module - the two score operations
//!
//! `load_latest` writes the latest record into the text targets and
//! `plot_gauge` mounts a gauge for it. Both take a table from one fetch of
//! the score file plus explicit handles to the targets they write; the
//! `*_from_path` variants do the fetch themselves.

mod targets;

pub use targets::{
    DashboardTargets, TextTarget, CERTAINTY_TARGET, INDICATED_TARGET, LATEST_DATE_TARGET,
};

use crate::charts::{GaugeHost, GaugeInstance, GaugeRenderer, GaugeSpec, RenderError};
use crate::config::DashboardConfig;
use crate::data::{spawn_fetch, LoaderError, RowSelection, ScoreRecord, ScoreTable};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Write the latest record's date, quote and current score into the targets.
///
/// On error the targets are left untouched.
pub fn load_latest(
    table: &ScoreTable,
    selection: RowSelection,
    targets: &mut DashboardTargets,
) -> Result<ScoreRecord, DashboardError> {
    let record = table.latest(selection)?;
    tracing::debug!(?record, "latest score record");
    tracing::debug!(date = %record.date, "latest score date");

    targets.latest_date.set_text(record.date.clone());
    targets.indicated.set_text(record.quote.clone());
    targets.certainty.set_text(record.current_score.to_text());
    Ok(record)
}

/// Build the score gauge for the latest record and mount it into the host,
/// disposing of any gauge already there.
///
/// Scores that do not parse become `NaN` and are mounted as-is.
pub fn plot_gauge(
    table: &ScoreTable,
    selection: RowSelection,
    host: &mut GaugeHost,
) -> Result<GaugeInstance, DashboardError> {
    let record = table.latest(selection)?;
    let current = record.current_score.parse_float();
    let past = record.past_score.parse_float();

    if current.is_nan() {
        tracing::warn!(value = %record.current_score.to_text(), "current_score is not a number");
    }
    if past.is_nan() {
        tracing::warn!(value = %record.past_score.to_text(), "past_score is not a number");
    }

    let instance = host.mount(GaugeSpec::score(current, past)).clone();
    tracing::debug!(
        target_name = %host.target(),
        instance = instance.id(),
        value = current,
        reference = past,
        "gauge mounted"
    );
    Ok(instance)
}

/// Write a mounted gauge to an `.svg` or `.png` file.
pub fn export_gauge(instance: &GaugeInstance, path: &Path) -> Result<(), DashboardError> {
    GaugeRenderer::render_to_file(instance.spec(), path)?;
    Ok(())
}

/// Fetch the configured score file and run `load_latest`.
pub fn load_latest_from_path(
    config: &DashboardConfig,
    targets: &mut DashboardTargets,
) -> Result<ScoreRecord, DashboardError> {
    let table = spawn_fetch(&config.source).wait()?;
    load_latest(&table, config.selection, targets)
}

/// Fetch the configured score file and run `plot_gauge`.
pub fn plot_gauge_from_path(
    config: &DashboardConfig,
    host: &mut GaugeHost,
) -> Result<GaugeInstance, DashboardError> {
    let table = spawn_fetch(&config.source).wait()?;
    plot_gauge(&table, config.selection, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScoreValue;

    fn table(rows: &[ScoreRecord]) -> ScoreTable {
        ScoreTable::from_records(rows).expect("table")
    }

    fn sample() -> ScoreTable {
        table(&[
            ScoreRecord::new("2024-01-01", "Buy", "42.5", "30.0"),
            ScoreRecord::new("2023-12-31", "Hold", "30.0", "10"),
        ])
    }

    #[test]
    fn test_load_latest_writes_targets() {
        let mut targets = DashboardTargets::default();
        let record = load_latest(&sample(), RowSelection::First, &mut targets).expect("load");

        assert_eq!(record.current_score, ScoreValue::Text("42.5".into()));
        assert_eq!(targets.latest_date.text(), Some("2024-01-01"));
        assert_eq!(targets.indicated.text(), Some("Buy"));
        assert_eq!(targets.certainty.text(), Some("42.5"));
        let names: Vec<&str> = targets.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["latest date", "indicated", "certainty"]);
    }

    #[test]
    fn test_plot_gauge_configuration() {
        let mut host = GaugeHost::default();
        let instance = plot_gauge(&sample(), RowSelection::First, &mut host).expect("plot");
        let spec = instance.spec();

        assert_eq!(instance.target(), "gauge");
        assert_eq!(spec.value, 42.5);
        assert_eq!(spec.delta.reference, 30.0);
        assert_eq!(spec.gauge.axis.range, [-100.0, 100.0]);
        assert!(!spec.gauge.axis.visible);
    }

    #[test]
    fn test_plot_gauge_numeric_cells() {
        let df = polars::df!(
            "date" => ["2024-01-01"],
            "quote" => ["Buy"],
            "current_score" => [42.5f64],
            "past_score" => [30.0f64],
        )
        .expect("df");
        let table = ScoreTable::from_dataframe(df).expect("table");
        let mut host = GaugeHost::default();
        let spec = plot_gauge(&table, RowSelection::First, &mut host)
            .expect("plot")
            .spec()
            .clone();
        assert_eq!(spec.value, 42.5);
        assert_eq!(spec.delta.reference, 30.0);
    }

    #[test]
    fn test_non_numeric_score_is_passed_through() {
        let mut host = GaugeHost::default();
        let rows = table(&[ScoreRecord::new("2024-01-01", "Buy", "N/A", "30.0")]);
        let instance = plot_gauge(&rows, RowSelection::First, &mut host).expect("plot");
        assert!(instance.spec().value.is_nan());
        assert_eq!(instance.spec().delta.reference, 30.0);

        let mut targets = DashboardTargets::default();
        load_latest(&rows, RowSelection::First, &mut targets).expect("load");
        assert_eq!(targets.certainty.text(), Some("N/A"));
    }

    #[test]
    fn test_rerender_disposes_previous_instance() {
        // Re-rendering replaces the mounted gauge instead of stacking a second one
        let mut host = GaugeHost::default();
        let first = plot_gauge(
            &table(&[ScoreRecord::new("2024-01-01", "Buy", "42.5", "30")]),
            RowSelection::First,
            &mut host,
        )
        .expect("first");
        let second = plot_gauge(
            &table(&[ScoreRecord::new("2024-01-02", "Sell", "-12", "42.5")]),
            RowSelection::First,
            &mut host,
        )
        .expect("second");

        assert_eq!(first.spec().value, 42.5);
        assert_eq!(second.spec().value, -12.0);
        assert_ne!(first.id(), second.id());
        assert_eq!(host.current().map(|i| i.id()), Some(second.id()));
        assert_eq!(host.mounted_total(), 2);
    }

    #[test]
    fn test_failed_load_leaves_targets_untouched() {
        let mut targets = DashboardTargets::default();
        targets.certainty.set_text("previous");
        let rows = table(&[ScoreRecord::new("2024-01-01", "Buy", "1", "2")]);

        // Drop a required cell by building a table with a null quote
        let df = polars::df!(
            "date" => [Some("2024-01-01")],
            "quote" => [None::<&str>],
            "current_score" => [Some("1")],
            "past_score" => [Some("2")],
        )
        .expect("df");
        let broken = ScoreTable::from_dataframe(df).expect("table");

        let result = load_latest(&broken, RowSelection::First, &mut targets);
        assert!(matches!(
            result,
            Err(DashboardError::Load(LoaderError::MalformedRow { .. }))
        ));
        assert_eq!(targets.certainty.text(), Some("previous"));
        assert_eq!(targets.latest_date.text(), None);

        load_latest(&rows, RowSelection::First, &mut targets).expect("load");
        assert_eq!(targets.certainty.text(), Some("1"));
    }
}
