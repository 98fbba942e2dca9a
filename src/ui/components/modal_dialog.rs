//! Modal dialog component
//!
//! Draws the backdrop and the modal container on top of the page. The
//! backdrop height is whatever the modal captured when it opened; a resize
//! while open does not re-measure it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::ui::modal::{BodyNode, ModalContent};

/// Modal dialog component
pub struct ModalDialog;

impl ModalDialog {
    /// Render the modal and its backdrop if the modal is open
    pub fn render(f: &mut Frame, app: &App) {
        let state = app.modal.state();
        if !state.is_open {
            return;
        }
        let Some(content) = &state.content else {
            return;
        };

        // Backdrop: full width, height frozen at open time
        let backdrop = LayoutManager::backdrop_rect(f.area(), state.backdrop_height);
        f.render_widget(Clear, backdrop);
        f.render_widget(Block::default().style(Style::default().bg(Color::Black)), backdrop);

        // The container carries the accent color as background and border
        let area = LayoutManager::centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, f.area());
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.accent_color))
            .style(Style::default().bg(state.accent_color))
            .title_top(
                Line::from(format!(" {} ", content.title))
                    .left_aligned()
                    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            )
            .title_top(
                Line::from(format!(" {} ", content.category_label))
                    .right_aligned()
                    .style(Style::default().fg(Color::Gray)),
            );

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // subtitle
                Constraint::Length(1), // reference
                Constraint::Length(1), // rule
                Constraint::Min(0),    // bullets
            ])
            .split(inner);

        let subtitle = Paragraph::new(content.subtitle.clone())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::ITALIC));
        f.render_widget(subtitle, chunks[0]);

        let reference = Paragraph::new(content.reference.clone())
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
        f.render_widget(reference, chunks[1]);

        let rule = Paragraph::new("─".repeat(chunks[2].width as usize)).style(Style::default().fg(Color::Gray));
        f.render_widget(rule, chunks[2]);

        Self::render_body(f, chunks[3], content, state.scroll);
    }

    /// Render the bullet blocks with their separators, wrapped and scrolled
    fn render_body(f: &mut Frame, area: Rect, content: &ModalContent, scroll: usize) {
        let lines = Self::body_lines(content, area.width);

        // Scrolling applies to wrapped output lines, so the clamp has to
        // count those, not the source lines, or the tail of a long bullet
        // stays out of reach
        let visible = area.height as usize;
        let max_scroll = Self::wrapped_line_count(&lines, area.width).saturating_sub(visible);
        let scroll = scroll.min(max_scroll) as u16;

        let body = Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0));
        f.render_widget(body, area);
    }

    /// Display lines the body occupies once wrapped to `width`. A long line
    /// wraps to several display lines; an empty line still occupies one.
    fn wrapped_line_count(lines: &[Line], width: u16) -> usize {
        if width == 0 {
            return lines.len();
        }
        lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(width as usize))
            .sum()
    }

    /// Flatten the structured body into display lines
    fn body_lines(content: &ModalContent, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for node in &content.body {
            match node {
                BodyNode::Bullet(text) => {
                    lines.push(Line::from(Span::styled(
                        text.clone(),
                        Style::default().fg(Color::White),
                    )));
                }
                BodyNode::Separator => {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        "─".repeat(width as usize),
                        Style::default().fg(Color::Gray),
                    )));
                    lines.push(Line::from(""));
                }
            }
        }

        lines
    }
}
