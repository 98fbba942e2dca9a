//! Tile creation and rendering.
//!
//! A [`TileView`] is a plain record of everything a rendered tile needs:
//! the resolved display fields plus the original entry and the accent color
//! inherited from its container. Activation reads the record back, so the
//! modal always shows exactly what the tile was created from.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::catalog::Entry;
use crate::constants::TITLE_PLACEHOLDER;
use crate::icons::{self, IconService};

/// View model for one rendered tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    /// The catalog entry this tile was created from, unmodified.
    pub entry: Entry,
    /// Label of the category the tile was bound under.
    pub category_label: String,
    /// Accent color inherited from the enclosing container's background.
    pub accent_color: Color,
    /// Resolved icon identifier (`icon-<name>`).
    pub icon: String,
    /// Resolved title, never empty.
    pub title: String,
    /// Resolved subtitle, possibly empty.
    pub subtitle: String,
}

/// Builds tile view models from catalog entries.
pub struct TileRenderer;

impl TileRenderer {
    /// Create the view model for one entry.
    ///
    /// Missing fields resolve here: an empty title becomes the placeholder
    /// and an empty icon name becomes the default icon identifier. The
    /// entry itself is carried through untouched.
    #[must_use]
    pub fn create_tile(entry: &Entry, category_label: &str, container_background: Color) -> TileView {
        let title = if entry.title.is_empty() {
            TITLE_PLACEHOLDER.to_string()
        } else {
            entry.title.clone()
        };

        TileView {
            entry: entry.clone(),
            category_label: category_label.to_string(),
            accent_color: container_background,
            icon: icons::icon_id(&entry.icon),
            title,
            subtitle: entry.subtitle.clone(),
        }
    }
}

impl TileView {
    /// Render this tile as one row of the section list.
    pub fn render(&self, is_selected: bool, icons: &IconService) -> ListItem<'static> {
        let glyph = icons.glyph(&self.icon);

        let mut line_spans = vec![
            Span::styled(format!(" {glyph} "), Style::default().fg(Color::White)),
            Span::styled(
                self.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ];

        if !self.subtitle.is_empty() {
            line_spans.push(Span::styled(
                format!("  {}", self.subtitle),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ));
        }

        let item_style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.accent_color)
        };

        ListItem::new(Line::from(line_spans)).style(item_style)
    }
}
