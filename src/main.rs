mod app;
mod color;
mod data;
mod export;
mod state;
mod ui;

use std::path::PathBuf;

use app::InternDashboardApp;
use clap::builder::TypedValueParser;
use clap::Parser;
use eframe::egui;
use state::AppState;

use crate::data::histogram::DEFAULT_BINS;

/// Intern performance evaluation dashboard.
#[derive(Debug, Parser)]
#[command(name = "intern-dashboard", version, about)]
struct Cli {
    /// CSV (or TSV) file with intern performance records
    #[arg(
        long,
        env = "INTERN_DASHBOARD_DATA",
        default_value = "Cleaned_Intern_Performance_Data.csv"
    )]
    data: PathBuf,

    /// Number of buckets in the completion time histogram
    #[arg(
        long,
        default_value_t = DEFAULT_BINS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    bins: usize,
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::new(cli.bins);
    // A failed load leaves the error in the status bar; File → Open still works.
    let _ = state.load(&cli.data);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Intern Performance Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(InternDashboardApp::new(state)))),
    )
}
