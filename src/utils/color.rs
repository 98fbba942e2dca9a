//! Color parsing for theme configuration.
//!
//! Section colors in the config file are either a named palette color or a
//! hex value (`#rgb`, `#rrggbb`, `#rrggbbaa`; alpha is ignored).

use ratatui::style::Color;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unknown color name '{0}'")]
    UnknownName(String),
    #[error("invalid hex color length (expected 3, 6, or 8 hex digits)")]
    InvalidHexLength,
    #[error("invalid hex digit")]
    InvalidHexDigit,
}

/// Parse a configured color into a terminal color.
pub fn parse_color(color: &str) -> Result<Color, ColorError> {
    let color = color.trim();
    match color.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => named_color(color).ok_or_else(|| ColorError::UnknownName(color.to_string())),
    }
}

/// Convert palette color names to terminal colors
#[must_use]
fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "slate" => Color::Rgb(47, 61, 79),
        "steel" => Color::Rgb(54, 69, 92),
        "navy" => Color::Rgb(35, 45, 66),
        "teal" => Color::Rgb(20, 84, 90),
        "moss" => Color::Rgb(58, 74, 50),
        "olive" => Color::Rgb(94, 92, 40),
        "sand" => Color::Rgb(107, 90, 54),
        "clay" => Color::Rgb(92, 58, 50),
        "plum" => Color::Rgb(74, 50, 83),
        "wine" => Color::Rgb(84, 35, 46),
        "charcoal" => Color::Rgb(43, 43, 43),
        "grey" | "gray" => Color::Rgb(74, 74, 74),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Result<Color, ColorError> {
    // Length and slicing below are byte-based, so multi-byte input must be
    // rejected before it can land inside a character
    if !hex.is_ascii() {
        return Err(ColorError::InvalidHexDigit);
    }

    let channel = |slice: &str| u8::from_str_radix(slice, 16).map_err(|_| ColorError::InvalidHexDigit);
    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => Ok(Color::Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        // alpha channel is accepted but dropped
        8 => Ok(Color::Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => Err(ColorError::InvalidHexLength),
    }
}
