//! Application state and navigation

use ratatui::layout::Size;
use ratatui::widgets::ListState;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::icons::IconService;
use crate::ui::binder::SectionBinder;
use crate::ui::modal::ModalController;
use crate::ui::page::{Page, SECTION_BINDINGS};
use crate::utils::color;

/// One row of the section list, as laid out at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRow {
    /// Spacing between containers
    Blank,
    /// Container heading, by container index
    Heading(usize),
    /// Rule under a heading, by container index
    Rule(usize),
    /// A tile, by container and tile index
    Tile { container: usize, tile: usize },
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub page: Page,
    pub modal: ModalController,
    /// Flattened layout of the section list. Built once after binding;
    /// rendering and mouse hit-testing share it.
    pub rows: Vec<PageRow>,
    /// Row index of every tile, in display order.
    pub tile_rows: Vec<usize>,
    /// Position in `tile_rows` of the current selection.
    pub selected_tile: usize,
    pub list_state: ListState,
    /// Last known terminal size.
    pub viewport: Size,
    pub mouse_enabled: bool,
    // Icons
    pub icons: IconService,
}

impl App {
    /// Create the app state: build the standard page, bind every known
    /// category into its container, and lay out the list rows.
    #[must_use]
    pub fn new(catalog: &Catalog, config: &Config) -> Self {
        let palette: Vec<_> = config
            .theme
            .section_colors
            .iter()
            .filter_map(|name| color::parse_color(name).ok())
            .collect();

        let mut page = Page::standard(&palette);
        for binding in SECTION_BINDINGS {
            SectionBinder::bind(&mut page, catalog, binding.category, binding.container_id, binding.label);
        }

        let rows = Self::layout_rows(&page);
        let tile_rows: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, PageRow::Tile { .. }))
            .map(|(index, _)| index)
            .collect();

        let mut list_state = ListState::default();
        list_state.select(tile_rows.first().copied());

        Self {
            should_quit: false,
            page,
            modal: ModalController::new(),
            rows,
            tile_rows,
            selected_tile: 0,
            list_state,
            viewport: Size::new(80, 24),
            mouse_enabled: config.ui.mouse_enabled,
            icons: IconService::new(config.ui.icon_theme),
        }
    }

    /// Flatten the page into list rows. Every container renders, tiles or
    /// not, so the page keeps its full structure on screen.
    fn layout_rows(page: &Page) -> Vec<PageRow> {
        let mut rows = Vec::new();

        for (container_index, container) in page.containers().iter().enumerate() {
            if !rows.is_empty() {
                rows.push(PageRow::Blank);
            }
            rows.push(PageRow::Heading(container_index));
            rows.push(PageRow::Rule(container_index));

            for tile_index in 0..container.tiles.len() {
                rows.push(PageRow::Tile {
                    container: container_index,
                    tile: tile_index,
                });
            }
        }

        rows
    }

    /// Row index of the current selection, if the page has any tiles.
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        self.tile_rows.get(self.selected_tile).copied()
    }

    /// Container and tile indices of the current selection.
    #[must_use]
    pub fn selected_tile_position(&self) -> Option<(usize, usize)> {
        self.selected_row().and_then(|row| self.tile_at_row(row))
    }

    /// Tile position at an absolute row index, if that row is a tile.
    #[must_use]
    pub fn tile_at_row(&self, row: usize) -> Option<(usize, usize)> {
        match self.rows.get(row) {
            Some(PageRow::Tile { container, tile }) => Some((*container, *tile)),
            _ => None,
        }
    }

    /// Move the selection to the tile at the given row. Returns false when
    /// the row is not a tile.
    pub fn select_row(&mut self, row: usize) -> bool {
        if let Some(position) = self.tile_rows.iter().position(|&tile_row| tile_row == row) {
            self.selected_tile = position;
            self.list_state.select(Some(row));
            true
        } else {
            false
        }
    }

    pub fn next_tile(&mut self) {
        if !self.tile_rows.is_empty() {
            self.selected_tile = (self.selected_tile + 1) % self.tile_rows.len();
            self.list_state.select(self.selected_row());
        }
    }

    pub fn previous_tile(&mut self) {
        if !self.tile_rows.is_empty() {
            self.selected_tile = if self.selected_tile == 0 {
                self.tile_rows.len() - 1
            } else {
                self.selected_tile - 1
            };
            self.list_state.select(self.selected_row());
        }
    }

    /// Jump to the first tile of the next container that has tiles.
    pub fn next_section(&mut self) {
        self.jump_section(1);
    }

    /// Jump to the first tile of the previous container that has tiles.
    pub fn previous_section(&mut self) {
        self.jump_section(-1);
    }

    fn jump_section(&mut self, direction: isize) {
        let Some((current, _)) = self.selected_tile_position() else {
            return;
        };

        let count = self.page.containers().len() as isize;
        let mut target = current as isize;
        for _ in 0..count {
            target = (target + direction).rem_euclid(count);
            if !self.page.containers()[target as usize].tiles.is_empty() {
                break;
            }
        }

        let target = target as usize;
        let position = self.tile_rows.iter().position(|&row| {
            matches!(self.rows[row], PageRow::Tile { container, .. } if container == target)
        });
        if let Some(position) = position {
            self.selected_tile = position;
            self.list_state.select(self.selected_row());
        }
    }
}
