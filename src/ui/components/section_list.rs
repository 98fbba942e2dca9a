//! Section list component
//!
//! Renders the whole page as one list: each container contributes a heading
//! row, a rule, and one row per tile, all carrying the container's
//! background color.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::{App, PageRow};
use crate::constants::EMPTY_PAGE_MESSAGE;

/// Section list component
pub struct SectionList;

impl SectionList {
    /// Render the section list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quick Reference ")
            .title_alignment(Alignment::Center);

        if app.page.tile_count() == 0 {
            // Show empty state message
            let empty_list = List::new(vec![ListItem::new(EMPTY_PAGE_MESSAGE)]).block(block);
            f.render_stateful_widget(empty_list, area, &mut app.list_state);
            return;
        }

        let items = Self::create_row_items(app, area);

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        // The backing list state carries the scroll offset mouse handling
        // relies on, so it is rendered with, not a clone.
        f.render_stateful_widget(list, area, &mut app.list_state);
    }

    /// Create list items for every laid out page row
    fn create_row_items(app: &App, area: ratatui::layout::Rect) -> Vec<ListItem<'static>> {
        let selected_row = app.selected_row();

        app.rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| match row {
                PageRow::Blank => ListItem::new(Line::from("")),
                PageRow::Heading(container_index) => {
                    let container = &app.page.containers()[*container_index];
                    ListItem::new(Line::from(Span::styled(
                        format!(" {} ", container.heading),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )))
                    .style(Style::default().bg(container.background))
                }
                PageRow::Rule(container_index) => {
                    let container = &app.page.containers()[*container_index];
                    ListItem::new(Line::from(Span::styled(
                        "─".repeat(area.width as usize),
                        Style::default().fg(Color::Gray),
                    )))
                    .style(Style::default().bg(container.background))
                }
                PageRow::Tile { container, tile } => {
                    let view = &app.page.containers()[*container].tiles[*tile];
                    view.render(selected_row == Some(row_index), &app.icons)
                }
            })
            .collect()
    }
}
