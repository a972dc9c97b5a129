// SafetyBoard - core/theme.rs
//
// Theme state: the light and dark palettes, the active-palette switch, the
// fixed accent colours, and the severity colour lookup.
// No egui types here; ui::theme maps these onto egui visuals.

use crate::core::colour::Colour;
use crate::core::model::Severity;

/// Semantic colour slots shared by both palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Colour,
    pub content_bg: Colour,
    pub text: Colour,
    pub subtext: Colour,
    pub header_text: Colour,
    pub section_border: Colour,
    pub form_bg: Colour,
    pub input_bg: Colour,
    pub input_border: Colour,
}

pub const DARK: Palette = Palette {
    background: Colour::rgb(0x00, 0x00, 0x00),
    content_bg: Colour::rgb(0x0F, 0x0F, 0x0F),
    text: Colour::rgb(0xFF, 0xFF, 0xFF),
    subtext: Colour::rgb(0xD6, 0xD6, 0xD6),
    header_text: Colour::rgb(0xFF, 0xFF, 0xFF),
    section_border: Colour::rgba(255, 255, 255, 26), // 10 % white
    form_bg: Colour::rgb(0x1A, 0x1A, 0x1A),
    input_bg: Colour::rgb(0x2A, 0x2A, 0x2A),
    input_border: Colour::rgb(0x44, 0x44, 0x44),
};

pub const LIGHT: Palette = Palette {
    background: Colour::rgb(0xFF, 0xFF, 0xFF),
    content_bg: Colour::rgb(0xF8, 0xF9, 0xFA),
    text: Colour::rgb(0x11, 0x11, 0x11),
    subtext: Colour::rgb(0x4A, 0x4A, 0x4A),
    header_text: Colour::rgb(0x11, 0x11, 0x11),
    section_border: Colour::rgba(0, 0, 0, 26), // 10 % black
    form_bg: Colour::rgb(0xF0, 0xF0, 0xF0),
    input_bg: Colour::rgb(0xFF, 0xFF, 0xFF),
    input_border: Colour::rgb(0xDD, 0xDD, 0xDD),
};

/// Accent colours, identical in both palettes.
pub mod accent {
    use crate::core::colour::Colour;

    pub const CORAL: Colour = Colour::rgb(0xFF, 0x7D, 0x54);
    pub const CYAN: Colour = Colour::rgb(0x3E, 0xEA, 0xFB);
    pub const GOLD: Colour = Colour::rgb(0xFF, 0xC1, 0x49);
    pub const MAGENTA: Colour = Colour::rgb(0xE4, 0x5A, 0x84);
    pub const INDIGO: Colour = Colour::rgb(0x66, 0x10, 0xF2);
    pub const BLUE: Colour = Colour::rgb(0x0D, 0x6E, 0xFD);
    pub const RED: Colour = Colour::rgb(0xDC, 0x35, 0x45);
    pub const EMERALD: Colour = Colour::rgb(0x10, 0xB9, 0x81);
    pub const PURPLE: Colour = Colour::rgb(0x8B, 0x5C, 0xF6);
}

/// Colour for a severity. `None` stands for an unrecognised severity and
/// maps to blue.
pub fn severity_colour(severity: Option<Severity>) -> Colour {
    match severity {
        Some(Severity::Low) => accent::EMERALD,
        Some(Severity::Medium) => accent::GOLD,
        Some(Severity::High) => accent::RED,
        None => accent::BLUE,
    }
}

/// Colour for a severity label such as "High". Unknown labels map to blue.
pub fn severity_colour_for_label(label: &str) -> Colour {
    severity_colour(Severity::from_label(label))
}

/// Which palette is active. Owned by the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl ThemeState {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Switch between the dark and light palettes.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "Theme toggled");
    }

    /// The active palette.
    pub fn palette(&self) -> &'static Palette {
        if self.dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colours_match_accents() {
        assert_eq!(severity_colour_for_label("Low").to_hex(), "#10b981");
        assert_eq!(severity_colour_for_label("Medium").to_hex(), "#ffc149");
        assert_eq!(severity_colour_for_label("High").to_hex(), "#dc3545");
        assert_eq!(severity_colour_for_label("Unknown").to_hex(), "#0d6efd");
    }

    #[test]
    fn test_severity_colour_ignores_palette() {
        let mut theme = ThemeState::default();
        let before = severity_colour(Some(Severity::High));
        theme.toggle();
        assert_eq!(severity_colour(Some(Severity::High)), before);
    }

    #[test]
    fn test_default_is_dark() {
        let theme = ThemeState::default();
        assert!(theme.is_dark());
        assert_eq!(theme.palette(), &DARK);
    }

    #[test]
    fn test_toggle_flips_palette() {
        let mut theme = ThemeState::default();
        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(theme.palette().background.to_hex(), "#ffffff");
        theme.toggle();
        assert_eq!(theme.palette().background.to_hex(), "#000000");
    }
}
