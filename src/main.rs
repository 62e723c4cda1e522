//! Panel Plotter
//!
//! CLI commands:
//! - gui: Launch the three-panel plot viewer (default)
//! - columns: Print the plottable columns of the configured dataset

mod color;
mod config;
mod controller;
mod crosshair;
mod dataset;
mod error;
mod focus;
mod gui;
mod logging;
mod panel;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::color::ColorAllocator;
use crate::controller::SelectionController;
use crate::dataset::Dataset;

#[derive(Parser)]
#[command(name = "panel_plotter")]
#[command(about = "Plot dataset columns on three focusable chart panels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to plotter.yaml config
    #[arg(short, long, default_value = "plotter.yaml")]
    config: PathBuf,

    /// Dataset file, overrides the config and PLOTTER_DATASET
    #[arg(short, long)]
    dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch native GUI viewer
    Gui,

    /// List plottable columns of the dataset
    Columns {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let mut config = if config_found {
        config::Config::load(&cli.config)?
    } else {
        config::Config::default()
    };
    config::Overrides::load().apply(&mut config);
    if let Some(path) = cli.dataset {
        config.dataset_path = path;
    }

    let _guard = logging::init_logging(&config.log_dir)?;
    tracing::info!("Panel Plotter starting up");
    if config_found {
        tracing::info!("Config loaded from {:?}", cli.config);
    } else {
        tracing::warn!("Config file not found: {:?}, using defaults", cli.config);
    }
    tracing::debug!("Effective config: {:?}", config);

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            let controller = SelectionController::new(
                config.dataset_source()?,
                config.y_extent,
                ColorAllocator::new(),
            );
            tracing::info!("Launching native GUI viewer");
            gui::run_viewer(config, controller)?;
        }

        Commands::Columns { json } => {
            list_columns(&config, json)?;
        }
    }

    Ok(())
}

/// Print the dataset's plottable columns
fn list_columns(config: &config::Config, json: bool) -> anyhow::Result<()> {
    let source = config.dataset_source()?;
    let Some(dataset) = Dataset::load(&source)? else {
        println!("Dataset not found: {:?}", source.path);
        return Ok(());
    };
    let columns: Vec<&str> = dataset.columns().collect();

    if json {
        let data = serde_json::json!({
            "path": source.path,
            "label_column": source.label_column,
            "rows": dataset.len(),
            "row_labels": dataset.row_labels(),
            "columns": columns,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if dataset.is_empty() {
        println!("{:?}: header only, no rows", source.path);
    } else {
        println!("{:?}: {} rows", source.path, dataset.len());
    }
    println!();
    for name in columns {
        println!("  - {}", name);
    }
    Ok(())
}
