use ratatui::style::Color;

use refdeck::utils::color::{parse_color, ColorError};

#[test]
fn test_parse_named_colors() {
    assert_eq!(parse_color("steel"), Ok(Color::Rgb(54, 69, 92)));
    assert_eq!(parse_color("clay"), Ok(Color::Rgb(92, 58, 50)));
    // Case-insensitive, both spellings of grey
    assert_eq!(parse_color("Grey"), parse_color("gray"));
}

#[test]
fn test_parse_hex_colors() {
    assert_eq!(parse_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
    assert_eq!(parse_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
    assert_eq!(parse_color("#36455c"), Ok(Color::Rgb(54, 69, 92)));
    // Alpha channel is accepted and dropped
    assert_eq!(parse_color("#36455cff"), Ok(Color::Rgb(54, 69, 92)));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_color("  steel "), Ok(Color::Rgb(54, 69, 92)));
    assert_eq!(parse_color(" #f00"), Ok(Color::Rgb(255, 0, 0)));
}

#[test]
fn test_parse_rejects_unknown_names() {
    assert_eq!(
        parse_color("taupe-ish"),
        Err(ColorError::UnknownName("taupe-ish".to_string()))
    );
}

#[test]
fn test_parse_rejects_bad_hex() {
    assert_eq!(parse_color("#gg0000"), Err(ColorError::InvalidHexDigit));
    assert_eq!(parse_color("#ff00"), Err(ColorError::InvalidHexLength));
    assert_eq!(parse_color("#"), Err(ColorError::InvalidHexLength));
}

#[test]
fn test_parse_rejects_multibyte_hex() {
    // Multi-byte characters must come back as an error, never slice
    // mid-character
    assert_eq!(parse_color("#€"), Err(ColorError::InvalidHexDigit));
    assert_eq!(parse_color("#ааа"), Err(ColorError::InvalidHexDigit));
}
