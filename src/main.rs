//! Score Gauge - latest-score dashboard
//!
//! Opens the dashboard window by default; `show` and `gauge` run headless.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use score_gauge::charts::GaugeHost;
use score_gauge::config::{DashboardConfig, DEFAULT_SOURCE};
use score_gauge::dashboard::{
    export_gauge, load_latest_from_path, plot_gauge_from_path, DashboardTargets,
};
use score_gauge::data::RowSelection;
use score_gauge::logging::{self, LogFormat};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "score_gauge")]
#[command(about = "Show the latest score as text and as a gauge")]
struct Cli {
    /// Score CSV with date, quote, current_score and past_score columns
    #[arg(long, global = true, default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// How the latest row is chosen
    #[arg(long, global = true, value_enum, default_value_t = RowSelection::First)]
    select: RowSelection,
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard window
    Gui,
    /// Print the latest date, indicated quote and certainty
    Show {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Render the score gauge
    Gauge {
        /// Output file, .svg or .png
        #[arg(long, required_unless_present = "spec")]
        out: Option<PathBuf>,
        /// Open the rendered file with the system viewer
        #[arg(long, default_value_t = false, requires = "out")]
        open: bool,
        /// Print the gauge configuration as JSON instead of rendering
        #[arg(long, default_value_t = false, conflicts_with = "out")]
        spec: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format, cli.verbose, cli.quiet);

    let config = DashboardConfig::new(cli.source).with_selection(cli.select);
    match run(cli.command.unwrap_or(Commands::Gui), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: DashboardConfig) -> anyhow::Result<()> {
    match command {
        Commands::Gui => score_gauge::gui::run(config)
            .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}")),
        Commands::Show { json } => show(&config, json),
        Commands::Gauge { out, open, spec } => gauge(&config, out, open, spec),
    }
}

fn show(config: &DashboardConfig, json: bool) -> anyhow::Result<()> {
    let mut targets = DashboardTargets::default();
    load_latest_from_path(config, &mut targets)
        .with_context(|| format!("reading {}", config.source.display()))?;

    if json {
        let map: Map<String, Value> = targets
            .iter()
            .map(|t| (t.name().to_string(), Value::from(t.text().unwrap_or_default())))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for target in targets.iter() {
            println!("{}: {}", target.name(), target.text().unwrap_or_default());
        }
    }
    Ok(())
}

fn gauge(
    config: &DashboardConfig,
    out: Option<PathBuf>,
    open: bool,
    spec: bool,
) -> anyhow::Result<()> {
    let mut host = GaugeHost::new(&config.gauge_target);
    let instance = plot_gauge_from_path(config, &mut host)
        .with_context(|| format!("reading {}", config.source.display()))?;

    if spec {
        println!("{}", instance.spec().to_json()?);
        return Ok(());
    }

    let Some(out) = out else {
        anyhow::bail!("--out is required unless --spec is given");
    };
    export_gauge(&instance, &out).with_context(|| format!("writing {}", out.display()))?;
    println!("{}", out.display());

    if open {
        open::that(&out).with_context(|| format!("opening {}", out.display()))?;
    }
    Ok(())
}
