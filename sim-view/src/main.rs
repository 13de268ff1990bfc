//! Application entry point for the 2D solar-system viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all interactive logic and rendering to [`Viewer`] from
//! the `viewer` module.

mod settings;
mod viewer;

use clap::Parser;
use settings::Settings;
use std::path::PathBuf;
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(about = "Gravitational N-body solar system viewer")]
struct Args {
    /// TOML file with `[physics]` and `[view]` tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of initial-condition files.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Initial-condition file to load at startup.
    #[arg(long)]
    file: Option<PathBuf>,
}

/// Starts the native eframe application.
///
/// A config file that fails to load is logged and replaced by the
/// defaults, so the viewer still opens.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::error!("cannot read {}: {e}; using defaults", path.display());
            Settings::default()
        }),
        None => Settings::default(),
    };
    if let Some(dir) = args.dir {
        settings.view.systems_dir = dir;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.view.width, settings.view.height]),
        ..Default::default()
    };

    log::info!("modelling started");
    let result = eframe::run_native(
        "Solar System",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(settings, args.file)))),
    );
    log::info!("modelling finished");
    result
}
