// SafetyBoard - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SafetyBoard";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SafetyBoard";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heading shown at the top of the dashboard.
pub const DASHBOARD_TITLE: &str = "AI Safety Incident Dashboard";

/// Sub-heading shown beneath the dashboard title.
pub const DASHBOARD_SUBTITLE: &str =
    "Monitor and track AI safety incidents across your organization";

// =============================================================================
// Colours
// =============================================================================

/// Returned by the colour utility for any input it cannot parse.
pub const FALLBACK_COLOUR_HEX: &str = "#000000";

/// Base colour used for button shadows when no colour is supplied.
pub const DEFAULT_BUTTON_BASE_HEX: &str = "#191919";

/// Brightness offset applied to derive a button's shadow colour.
/// Applied positively for pure black, negatively for everything else.
pub const SHADOW_OFFSET: i32 = 30;

// =============================================================================
// Particle background
// =============================================================================

/// Default number of decorative particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 80;

/// Hard upper bound on the particle count (prevents configuration mistakes).
pub const MAX_PARTICLE_COUNT: usize = 1_000;

/// Maximum particle radius in field units (exclusive).
pub const PARTICLE_MAX_RADIUS: f32 = 1.2;

/// Maximum absolute per-axis particle speed in field units per tick.
pub const PARTICLE_MAX_SPEED: f32 = 0.075;

/// Maximum particle opacity (exclusive).
pub const PARTICLE_MAX_OPACITY: f32 = 0.2;

/// Display scale applied to particle radii when painting.
///
/// The raw radii are sub-pixel on high-DPI displays; this keeps them visible.
pub const PARTICLE_DRAW_SCALE: f32 = 1.5;

/// Colours particles are drawn from.
pub const PARTICLE_COLOURS: [&str; 5] = ["#3EEAFB", "#FF7D54", "#FFC149", "#36F1CD", "#E45A84"];

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum user-configurable font size.
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Display format for incident timestamps (e.g. "Mar 15, 2025, 10:00 AM").
pub const REPORTED_AT_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Message shown when the report form is submitted with a blank field.
pub const VALIDATION_NOTICE: &str = "Please fill in all required fields.";

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum accepted size of config.toml in bytes.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Default log level when nothing else is specified.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
