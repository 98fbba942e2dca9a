//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to resolve catalog icon names into
//! terminal glyphs, supporting different themes like emoji, Unicode, and
//! ASCII fallbacks. It also owns the `icon-<name>` identifier convention
//! shared with the catalog documents.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ICON, ICON_ID_PREFIX};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Glyphs for one icon name across all themes
#[derive(Debug, Clone, Copy)]
struct GlyphSet {
    emoji: &'static str,
    unicode: &'static str,
    ascii: &'static str,
}

impl GlyphSet {
    fn for_theme(&self, theme: IconTheme) -> &'static str {
        match theme {
            IconTheme::Emoji => self.emoji,
            IconTheme::Unicode => self.unicode,
            IconTheme::Ascii => self.ascii,
        }
    }
}

/// Glyph shown for icon names the table does not know
const FALLBACK_GLYPHS: GlyphSet = GlyphSet {
    emoji: "🔹",
    unicode: "◆",
    ascii: "?",
};

/// Known icon names, keyed by the bare name without the `icon-` prefix
static GLYPHS: Lazy<HashMap<&'static str, GlyphSet>> = Lazy::new(|| {
    HashMap::from([
        (
            DEFAULT_ICON,
            GlyphSet {
                emoji: "🎲",
                unicode: "⚀",
                ascii: "*",
            },
        ),
        (
            "crossed-swords",
            GlyphSet {
                emoji: "⚔️",
                unicode: "⚔",
                ascii: "X",
            },
        ),
        (
            "grab",
            GlyphSet {
                emoji: "✊",
                unicode: "✊",
                ascii: "G",
            },
        ),
        (
            "hand",
            GlyphSet {
                emoji: "✋",
                unicode: "✋",
                ascii: "H",
            },
        ),
        (
            "magic-swirl",
            GlyphSet {
                emoji: "🌀",
                unicode: "✺",
                ascii: "M",
            },
        ),
        (
            "sprint",
            GlyphSet {
                emoji: "🏃",
                unicode: "➤",
                ascii: ">",
            },
        ),
    ])
});

/// Build the host icon identifier for a catalog icon name.
///
/// An empty name resolves to the default icon first, so the result is always
/// a usable `icon-<name>` identifier.
#[must_use]
pub fn icon_id(name: &str) -> String {
    let name = if name.is_empty() { DEFAULT_ICON } else { name };
    format!("{ICON_ID_PREFIX}{name}")
}

/// Icon service for managing themes and resolving glyphs
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Resolve an icon to a glyph in the current theme.
    ///
    /// Accepts either a bare name (`crossed-swords`) or a full identifier
    /// (`icon-crossed-swords`). Unknown names get a neutral fallback glyph.
    #[must_use]
    pub fn glyph(&self, icon: &str) -> &'static str {
        let name = icon.strip_prefix(ICON_ID_PREFIX).unwrap_or(icon);
        GLYPHS
            .get(name)
            .unwrap_or(&FALLBACK_GLYPHS)
            .for_theme(self.current_theme)
    }
}
