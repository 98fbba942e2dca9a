//! The detail modal: owned state, structured content, open/close transitions.
//!
//! There is exactly one modal for the whole page. Opening it replaces
//! whatever it previously showed; closing it only flips the visibility
//! markers, the last payload stays behind until the next open overwrites it.

use ratatui::layout::Size;
use ratatui::style::Color;

use crate::catalog::Entry;
use crate::constants::TITLE_PLACEHOLDER;
use crate::ui::page::Page;

/// Lines scrolled by a page-wise jump
const SCROLL_PAGE_SIZE: usize = 10;

/// One block of the modal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyNode {
    /// A bullet paragraph, text carried verbatim including inline markup.
    Bullet(String),
    /// A horizontal rule between bullets.
    Separator,
}

/// Structured content of the modal, built from an entry without any
/// string templating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    /// Resolved title, never empty.
    pub title: String,
    /// Category label shown opposite the title.
    pub category_label: String,
    /// Description when present, otherwise the entry subtitle, possibly empty.
    pub subtitle: String,
    /// Source reference line, possibly empty.
    pub reference: String,
    /// Bullets interleaved with separators: n bullets produce n - 1
    /// separators, zero bullets produce an empty body.
    pub body: Vec<BodyNode>,
}

impl ModalContent {
    /// Build the modal content for one entry.
    #[must_use]
    pub fn from_entry(entry: &Entry, category_label: &str) -> Self {
        let title = if entry.title.is_empty() {
            TITLE_PLACEHOLDER.to_string()
        } else {
            entry.title.clone()
        };

        // The description takes precedence over the subtitle when both exist
        let subtitle = if entry.description.is_empty() {
            entry.subtitle.clone()
        } else {
            entry.description.clone()
        };

        let mut body = Vec::with_capacity(entry.bullets.len() * 2);
        for (index, bullet) in entry.bullets.iter().enumerate() {
            if index > 0 {
                body.push(BodyNode::Separator);
            }
            body.push(BodyNode::Bullet(bullet.clone()));
        }

        Self {
            title,
            category_label: category_label.to_string(),
            subtitle,
            reference: entry.reference.clone(),
            body,
        }
    }

    /// Number of bullets in the body.
    pub fn bullet_count(&self) -> usize {
        self.body
            .iter()
            .filter(|node| matches!(node, BodyNode::Bullet(_)))
            .count()
    }

    /// Number of separators in the body.
    pub fn separator_count(&self) -> usize {
        self.body
            .iter()
            .filter(|node| matches!(node, BodyNode::Separator))
            .count()
    }
}

/// Everything the modal knows, in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub is_open: bool,
    /// Entry shown on the last open, kept after close.
    pub entry: Option<Entry>,
    /// Accent color of the last open, applied to the modal surface.
    pub accent_color: Color,
    pub category_label: String,
    pub content: Option<ModalContent>,
    /// Viewport height captured when the modal opened. The backdrop keeps
    /// this height even if the terminal is resized while open.
    pub backdrop_height: u16,
    /// Body scroll offset in lines.
    pub scroll: usize,
}

/// The single modal controller for the page.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Open the modal for an entry.
    ///
    /// Stores the payload, rebuilds the content, captures the viewport
    /// height for the backdrop, resets the scroll position, and raises the
    /// visibility markers on both the controller and the page.
    pub fn open(&mut self, page: &mut Page, entry: Entry, color: Color, category_label: &str, viewport: Size) {
        self.state.content = Some(ModalContent::from_entry(&entry, category_label));
        self.state.entry = Some(entry);
        self.state.accent_color = color;
        self.state.category_label = category_label.to_string();
        self.state.backdrop_height = viewport.height;
        self.state.scroll = 0;
        self.state.is_open = true;
        page.modal_open = true;

        if let Some(content) = &self.state.content {
            log::debug!("modal opened: '{}' [{}]", content.title, content.category_label);
        }
    }

    /// Close the modal, clearing the visibility markers on the controller
    /// and the page. The stored payload is left intact.
    pub fn close(&mut self, page: &mut Page) {
        self.state.is_open = false;
        page.modal_open = false;
        log::debug!("modal closed");
    }

    pub fn scroll_up(&mut self) {
        self.state.scroll = self.state.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.state.scroll = self.state.scroll.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.state.scroll = self.state.scroll.saturating_sub(SCROLL_PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.state.scroll = self.state.scroll.saturating_add(SCROLL_PAGE_SIZE);
    }

    pub fn scroll_to_top(&mut self) {
        self.state.scroll = 0;
    }

    /// Jump past the end; rendering clamps to the real maximum.
    pub fn scroll_to_bottom(&mut self) {
        self.state.scroll = usize::MAX;
    }
}
