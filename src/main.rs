// SentiScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config is read first so its [logging] level
//    can participate in the log filter priority chain)
// 3. Logging initialisation
// 4. Optional startup dataset load
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use sentiscope::app;
pub use sentiscope::core;
pub use sentiscope::platform;
pub use sentiscope::ui;
pub use sentiscope::util;

use clap::Parser;
use std::path::PathBuf;

/// SentiScope - Interactive customer-review sentiment dashboard.
///
/// Point SentiScope at a CSV or JSON review table to explore sentiment,
/// language, and review-length distributions with filterable charts.
#[derive(Parser, Debug)]
#[command(name = "SentiScope", version, about)]
struct Cli {
    /// Review dataset to load at startup (opens empty if omitted).
    path: Option<PathBuf>,

    /// Initial language filter: all, english, or arabic.
    #[arg(short = 'l', long = "language")]
    language: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // [logging] level can feed the filter chain; warnings are replayed
    // once the subscriber is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SentiScope starting"
    );

    // Create application state
    let mut state = app::state::AppState::new(&config);

    // If a path was provided on the CLI, load it synchronously before the
    // GUI appears; a failure leaves the error in the status bar.
    if let Some(ref path) = cli.path {
        gui::load_dataset(&mut state, path);
    }

    // Apply the initial language filter after the load (loading resets the
    // selection to neutral).
    if let Some(ref name) = cli.language {
        match core::model::LanguageChoice::parse(name) {
            Some(choice) => {
                state.filter_state.language = choice;
                state.apply_filters();
            }
            None => {
                tracing::warn!(value = %name, "Unknown --language value; expected all, english, or arabic");
            }
        }
    }

    // Launch the GUI
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::SentiScopeApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch SentiScope GUI: {e}");
        std::process::exit(1);
    }
}
