// SafetyBoard - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Initial incident store and theme selection
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can use `crate::app::...`, `crate::core::...` etc.
pub use safetyboard::app;
pub use safetyboard::core;
pub use safetyboard::platform;
pub use safetyboard::ui;
pub use safetyboard::util;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Edge length of the generated window icon in pixels.
const ICON_SIZE: u32 = 64;

/// Render the window icon: an emerald ring around a gold core.
///
/// Drawn at startup so the binary carries no asset files.
fn load_icon() -> egui::IconData {
    let centre = (ICON_SIZE as f32 - 1.0) / 2.0;
    let outer = ICON_SIZE as f32 / 2.0;
    let ring = outer * 0.72;
    let emerald = core::theme::accent::EMERALD;
    let gold = core::theme::accent::GOLD;

    let img = image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - centre;
        let dy = y as f32 - centre;
        let d = (dx * dx + dy * dy).sqrt();
        if d > outer {
            image::Rgba([0, 0, 0, 0])
        } else if d > ring {
            image::Rgba([emerald.r, emerald.g, emerald.b, 255])
        } else {
            image::Rgba([gold.r, gold.g, gold.b, 255])
        }
    });

    egui::IconData {
        rgba: img.into_raw(),
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

/// Theme choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

/// SafetyBoard - AI safety incident dashboard.
///
/// Browse, filter, sort, report and delete AI safety incidents. Incidents are
/// kept in memory only and are discarded when the window closes.
#[derive(Parser, Debug)]
#[command(name = "SafetyBoard", version, about)]
struct Cli {
    /// Start in the given theme (overrides config.toml).
    #[arg(short = 't', long = "theme", value_enum)]
    theme: Option<ThemeArg>,

    /// Disable the animated particle background.
    #[arg(long = "no-particles")]
    no_particles: bool,

    /// Start with an empty incident list instead of the demo incidents.
    #[arg(long = "empty")]
    empty: bool,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can apply.
    let paths = cli
        .config_dir
        .clone()
        .map(platform::config::PlatformPaths::at)
        .unwrap_or_else(platform::config::PlatformPaths::resolve);
    let (config, config_warnings) = platform::config::load_config(&paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SafetyBoard starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let dark_mode = match cli.theme {
        Some(ThemeArg::Dark) => true,
        Some(ThemeArg::Light) => false,
        None => config.dark_mode,
    };

    let store = if cli.empty {
        core::store::IncidentStore::new()
    } else {
        core::store::IncidentStore::seeded()
    };
    tracing::info!(incidents = store.len(), dark_mode, "Ready to launch GUI");

    let mut state = app::state::AppState::new(
        store,
        core::theme::ThemeState::new(dark_mode),
        cli.debug,
    );
    state.particles_enabled = config.particles_enabled && !cli.no_particles;
    if let Some(first) = config_warnings.first() {
        state.status_message = format!("Config: {first}");
    }

    let particle_count = config.particle_count;
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(gui::SafetyBoardApp::new(
                state,
                particle_count,
                font_size,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch SafetyBoard GUI: {e}");
        std::process::exit(1);
    }
}
