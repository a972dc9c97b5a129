// SafetyBoard - core/colour.rs
//
// Hex colour parsing and brightness adjustment.
// Core layer: pure logic, no egui types (the ui layer converts `Colour`).
//
// The adjustment is cosmetic, so it fails soft: malformed input yields
// `FALLBACK_COLOUR_HEX` instead of an error.

use crate::util::constants::{DEFAULT_BUTTON_BASE_HEX, FALLBACK_COLOUR_HEX, SHADOW_OFFSET};
use regex::Regex;
use std::sync::OnceLock;

/// Matches a 6-digit hex colour with an optional leading '#'.
fn hex_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^#?(?P<hex>[0-9A-Fa-f]{6})$").ok())
        .as_ref()
}

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Opaque colour from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `rrggbb` (either case). Returns `None` for anything else.
    pub fn from_hex(text: &str) -> Option<Self> {
        let caps = hex_pattern()?.captures(text)?;
        let hex = caps.name("hex")?.as_str();
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`. Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Add `amount` to each colour channel, clamping to `[0, 255]`.
    /// Alpha is left unchanged.
    pub fn adjusted(&self, amount: i32) -> Self {
        let shift = |c: u8| i32::from(c).saturating_add(amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
            a: self.a,
        }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Lighten (positive `amount`) or darken (negative) a hex colour.
///
/// Each of R, G and B is shifted independently and clamped to `[0, 255]`.
/// `None` or any string that is not six hex digits returns `#000000`.
pub fn adjust_colour(colour: Option<&str>, amount: i32) -> String {
    let Some(text) = colour else {
        return FALLBACK_COLOUR_HEX.to_string();
    };
    match Colour::from_hex(text) {
        Some(parsed) => parsed.adjusted(amount).to_hex(),
        None => {
            tracing::debug!(input = text, "Unparseable colour; using fallback");
            FALLBACK_COLOUR_HEX.to_string()
        }
    }
}

/// Shadow colour for a raised button of the given base colour.
///
/// Pure black is lightened so the shadow stays visible; every other colour
/// is darkened. A missing base uses the default button colour.
pub fn shadow_colour(base: Option<&str>) -> String {
    let base = base.unwrap_or(DEFAULT_BUTTON_BASE_HEX);
    let offset = if Colour::from_hex(base) == Some(Colour::rgb(0, 0, 0)) {
        SHADOW_OFFSET
    } else {
        -SHADOW_OFFSET
    };
    adjust_colour(Some(base), offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_black() {
        assert_eq!(adjust_colour(Some("#000000"), 30), "#1e1e1e");
    }

    #[test]
    fn test_darken_white_uppercase_input() {
        assert_eq!(adjust_colour(Some("#FFFFFF"), -30), "#e1e1e1");
    }

    #[test]
    fn test_missing_input_falls_back() {
        assert_eq!(adjust_colour(None, 10), "#000000");
    }

    #[test]
    fn test_malformed_input_falls_back() {
        for bad in ["", "#fff", "#12345g", "not a colour", "#1234567", "##123456", " #000000 ", "#000000\n"] {
            assert_eq!(adjust_colour(Some(bad), 10), "#000000", "input {bad:?}");
        }
    }

    #[test]
    fn test_padded_input_is_malformed() {
        assert_eq!(adjust_colour(Some(" #000000 "), 30), "#000000");
        assert_eq!(Colour::from_hex(" #000000"), None);
    }

    #[test]
    fn test_channels_clamp_independently() {
        assert_eq!(adjust_colour(Some("#f01080"), 20), "#ff2494");
        assert_eq!(adjust_colour(Some("f01080"), -20), "#dc006c");
    }

    #[test]
    fn test_shadow_colour_direction() {
        assert_eq!(shadow_colour(Some("#000000")), "#1e1e1e");
        assert_eq!(shadow_colour(Some("#0D6EFD")), "#0050df");
        assert_eq!(shadow_colour(None), "#000000");
    }

    #[test]
    fn test_extreme_offsets_saturate() {
        assert_eq!(adjust_colour(Some("#808080"), i32::MAX), "#ffffff");
        assert_eq!(adjust_colour(Some("#808080"), i32::MIN), "#000000");
    }

    #[test]
    fn test_adjusted_preserves_alpha() {
        let c = Colour::rgba(10, 20, 30, 26).adjusted(5);
        assert_eq!(c, Colour::rgba(15, 25, 35, 26));
    }
}
