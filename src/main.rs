//! Mobile Banking Sentiment - review dashboard for BCA Mobile & BRImo
//!
//! Loads the pre-labeled review CSV once, normalizes its labels and shows
//! summary pages, filterable charts and the raw table.

mod charts;
mod config;
mod data;
mod gui;
mod stats;
mod view;

use anyhow::{anyhow, Context};
use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use gui::SentimentApp;
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load(Path::new(CONFIG_FILE))?;

    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .init();

    // The dataset is a startup precondition: no window without it
    let dataset = data::load(&config.data_path)
        .with_context(|| format!("loading reviews from {}", config.data_path.display()))?;
    info!(
        source = %dataset.source().display(),
        reviews = dataset.len(),
        dropped = dataset.report().dropped_sentiment,
        "dataset ready"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Mobile Banking Sentiment"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Mobile Banking Sentiment",
        options,
        Box::new(move |cc| Ok(Box::new(SentimentApp::new(cc, dataset, config)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
