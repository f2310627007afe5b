//! Countryscope CLI
//!
//! Offline tooling over the same dataset and chart builders as the server:
//! - Summarize the dataset
//! - Render one chart as plotly JSON
//! - Print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use countryscope::charts::{build_time_series_chart, TimeSeriesParams};
use countryscope::config::{generate_default_config, Config};
use countryscope::dashboard::{ChartId, DashboardInputs, Dispatcher};
use countryscope::dataset::{load_table, Measure, Table, YearRange};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "countryscope-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the Gapminder dataset and render dashboard charts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset URL or CSV path (overrides config)
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show rows, countries, continents and year span
    Summary {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print one chart's figure as JSON
    Render {
        /// Chart id (bubble, meas-vs-year, top-pop, pop-pie)
        chart: String,
        /// First year of the range
        #[arg(long)]
        from: Option<f64>,
        /// Last year of the range
        #[arg(long)]
        to: Option<f64>,
        /// Countries for the time series (comma-separated)
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,
        /// Measure for the time series
        #[arg(long, default_value = "pop")]
        measure: Measure,
        /// Bubble x axis
        #[arg(long, default_value = "gdpPercap")]
        x: Measure,
        /// Bubble y axis
        #[arg(long, default_value = "lifeExp")]
        y: Measure,
        /// Bubble size
        #[arg(long, default_value = "pop")]
        size: Measure,
        /// Compact output
        #[arg(long)]
        compact: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };
    if let Some(dataset) = cli.dataset {
        config.dataset.source = dataset;
    }

    match cli.command {
        Commands::Summary { format } => {
            let table = load(&config).await?;
            let summary = table.summary();

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
                _ => {
                    println!("Countryscope v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("Source: {}", config.dataset.source);
                    println!("Rows: {}", summary.rows);
                    println!("Countries: {}", summary.countries);
                    let continents: Vec<&str> =
                        summary.continents.iter().map(|c| c.as_str()).collect();
                    println!("Continents: {}", continents.join(", "));
                    if let (Some(first), Some(last)) = (summary.first_year, summary.last_year) {
                        println!("Years: {} - {}", first, last);
                    }
                }
            }
        }

        Commands::Render {
            chart,
            from,
            to,
            countries,
            measure,
            x,
            y,
            size,
            compact,
        } => {
            let chart: ChartId = chart.parse()?;
            let table = Arc::new(load(&config).await?);
            let dispatcher = Dispatcher::new(Arc::clone(&table), config.charts.settings())?
                .with_default_countries(config.charts.default_countries.clone());

            let defaults = dispatcher.default_inputs();
            let inputs = DashboardInputs {
                bubble_x: x,
                bubble_y: y,
                bubble_size: size,
                active_countries: if countries.is_empty() {
                    defaults.active_countries
                } else {
                    countries
                },
                measure,
                zoom: match (from, to) {
                    (Some(from), Some(to)) => Some(json!({
                        "xaxis.range[0]": from,
                        "xaxis.range[1]": to,
                    })),
                    _ => None,
                },
            };

            let figure = match (chart, inputs.year_range()) {
                // The time series is the chart that emits the range, so the
                // range only narrows its own window here
                (ChartId::MeasureVsYear, Some(window)) => {
                    render_window(&table, &inputs, window)
                }
                _ => dispatcher.render(chart, &inputs),
            };

            if compact {
                println!("{}", serde_json::to_string(&figure)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&figure)?);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

async fn load(config: &Config) -> anyhow::Result<Table> {
    load_table(&config.dataset.source, config.dataset.fetch_timeout())
        .await
        .with_context(|| format!("Cannot load dataset from {}", config.dataset.source))
}

fn render_window(
    table: &Table,
    inputs: &DashboardInputs,
    window: YearRange,
) -> countryscope::charts::Figure {
    let params = TimeSeriesParams {
        window: Some(window),
        ..TimeSeriesParams::new(inputs.active_countries.clone(), inputs.measure)
    };
    build_time_series_chart(table, &params)
}
