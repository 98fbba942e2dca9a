//! Page structure: named section containers and the page-level modal marker.
//!
//! The page is the stable surface the rest of the UI talks to. Containers
//! are created up front with fixed identifiers and background colors;
//! binding fills them with tiles, and rendering walks them in order.

use ratatui::style::Color;

use crate::constants::{
    CONTAINER_ACTION, CONTAINER_ATTACK, CONTAINER_INCIDENTAL, CONTAINER_MANEUVER, CONTAINER_QUALITIES,
};
use crate::ui::tile::TileView;

/// Fallback container backgrounds when the configured palette is empty
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::Rgb(54, 69, 92),
    Color::Rgb(92, 58, 50),
    Color::Rgb(58, 74, 50),
    Color::Rgb(74, 50, 83),
    Color::Rgb(20, 84, 90),
];

/// One row of the standard binding table: which catalog category fills
/// which container, and the label shown next to entries from it.
#[derive(Debug, Clone, Copy)]
pub struct SectionBinding {
    pub category: &'static str,
    pub container_id: &'static str,
    pub label: &'static str,
}

/// Categories bound at startup, in page order.
pub const SECTION_BINDINGS: &[SectionBinding] = &[
    SectionBinding {
        category: "action",
        container_id: CONTAINER_ACTION,
        label: "Action",
    },
    SectionBinding {
        category: "attack",
        container_id: CONTAINER_ATTACK,
        label: "Attack",
    },
    SectionBinding {
        category: "incidental",
        container_id: CONTAINER_INCIDENTAL,
        label: "Incidental",
    },
    SectionBinding {
        category: "maneuver",
        container_id: CONTAINER_MANEUVER,
        label: "Maneuver",
    },
    SectionBinding {
        category: "qualities",
        container_id: CONTAINER_QUALITIES,
        label: "Qualities",
    },
];

/// A named section container on the page.
#[derive(Debug, Clone)]
pub struct Container {
    pub id: String,
    pub heading: String,
    pub background: Color,
    pub tiles: Vec<TileView>,
}

/// The whole page: ordered containers plus the modal visibility marker.
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: Vec<Container>,
    /// Mirrors the modal controller's open flag so page-level rendering can
    /// dim or freeze without reaching into the controller.
    pub modal_open: bool,
}

impl Page {
    #[must_use]
    pub fn with_containers(containers: Vec<Container>) -> Self {
        Self {
            containers,
            modal_open: false,
        }
    }

    /// Build the standard page with the five known containers, empty of
    /// tiles. Backgrounds are taken from the palette in order, cycling when
    /// the palette is shorter than the container list.
    #[must_use]
    pub fn standard(palette: &[Color]) -> Self {
        let palette = if palette.is_empty() { &DEFAULT_PALETTE } else { palette };
        let specs = [
            (CONTAINER_ACTION, "Actions"),
            (CONTAINER_ATTACK, "Attacks"),
            (CONTAINER_INCIDENTAL, "Incidentals"),
            (CONTAINER_MANEUVER, "Maneuvers"),
            (CONTAINER_QUALITIES, "Qualities"),
        ];

        let containers = specs
            .iter()
            .enumerate()
            .map(|(index, (id, heading))| Container {
                id: (*id).to_string(),
                heading: (*heading).to_string(),
                background: palette[index % palette.len()],
                tiles: Vec::new(),
            })
            .collect();

        Self::with_containers(containers)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|container| container.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|container| container.id == id)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Tile at the given container/tile position, if any.
    pub fn tile(&self, container: usize, tile: usize) -> Option<&TileView> {
        self.containers.get(container).and_then(|c| c.tiles.get(tile))
    }

    /// Total tile count across all containers.
    pub fn tile_count(&self) -> usize {
        self.containers.iter().map(|container| container.tiles.len()).sum()
    }
}
