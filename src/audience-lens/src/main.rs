//! AudienceLens — audience-segmentation analytics report.
//!
//! Builds the dashboard snapshot from the seeded reporting-period tables and
//! emits it as JSON for the presentation layer.

use audience_core::config::AppConfig;
use audience_reporting::{seed, DashboardComposer};
use audience_strategy::StrategyIndex;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "audience-lens")]
#[command(about = "Audience-segmentation analytics report")]
#[command(version)]
struct Cli {
    /// Country rows to keep after ranking (overrides config)
    #[arg(long, env = "AUDIENCE_LENS__REPORT__TOP_COUNTRIES")]
    top_countries: Option<usize>,

    /// Cap on the aggregated interest list (overrides config)
    #[arg(long, env = "AUDIENCE_LENS__REPORT__INTEREST_LIMIT")]
    interest_limit: Option<usize>,

    /// Print the conversion strategy for one segment instead of the snapshot
    #[arg(long)]
    segment: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audience_lens=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(top_countries) = cli.top_countries {
        config.report.top_countries = top_countries;
    }
    if let Some(interest_limit) = cli.interest_limit {
        config.report.interest_limit = interest_limit;
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    info!(
        top_countries = config.report.top_countries,
        interest_limit = config.report.interest_limit,
        "Configuration loaded"
    );

    let strategies = StrategyIndex::from_records(seed::strategies());

    // Strategy mode: resolve one segment and print its plan (or nothing).
    if let Some(segment) = cli.segment {
        return match strategies.lookup(&segment) {
            Some(strategy) => {
                print_json(&strategy, config.output.pretty)?;
                Ok(())
            }
            None => {
                warn!(segment = %segment, "No authored strategy for segment");
                Ok(())
            }
        };
    }

    let composer = DashboardComposer::new(config.report.clone());
    let snapshot = composer.compose(
        &seed::segment_tables(),
        &seed::aggregate_metrics(),
        &seed::metric_comparisons(),
        &seed::trend(),
    )?;

    print_json(&snapshot, config.output.pretty)?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
