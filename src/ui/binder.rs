//! Section binding: fills page containers with tiles from the catalog.

use log::debug;

use crate::catalog::Catalog;
use crate::ui::page::Page;
use crate::ui::tile::TileRenderer;

/// Binds catalog categories into page containers.
pub struct SectionBinder;

impl SectionBinder {
    /// Create one tile per entry of the named category, in catalog order,
    /// inside the named container.
    ///
    /// A container the page does not have, or a category the catalog does
    /// not have, leaves the page unchanged. Neither case is an error.
    pub fn bind(page: &mut Page, catalog: &Catalog, category: &str, container_id: &str, label: &str) {
        let Some(container) = page.container_mut(container_id) else {
            debug!("container '{container_id}' not on page, skipping category '{category}'");
            return;
        };

        let Some(entries) = catalog.category(category) else {
            debug!("category '{category}' not in catalog, container '{container_id}' stays empty");
            return;
        };

        let background = container.background;
        for entry in entries {
            container.tiles.push(TileRenderer::create_tile(entry, label, background));
        }

        debug!("bound {} tiles into container '{container_id}'", entries.len());
    }
}
