//! Constants used throughout the application
//!
//! This module centralizes magic strings, placeholder text, and layout values
//! to improve maintainability and consistency.

// Entry rendering defaults
/// Shown in place of a missing or empty entry title
pub const TITLE_PLACEHOLDER: &str = "[no title]";
/// Icon name used when an entry declares none
pub const DEFAULT_ICON: &str = "perspective-dice-six-faces-one";
/// Prefix turning a bare icon name into a host icon identifier
pub const ICON_ID_PREFIX: &str = "icon-";

// Stable container identifiers provided by the page
pub const CONTAINER_ACTION: &str = "basic-action";
pub const CONTAINER_ATTACK: &str = "basic-attack";
pub const CONTAINER_INCIDENTAL: &str = "basic-incidental";
pub const CONTAINER_MANEUVER: &str = "basic-maneuver";
pub const CONTAINER_QUALITIES: &str = "basic-qualities";

// Status bar hints
pub const HINTS_BROWSE: &str = "j/k: tiles  J/K: sections  Enter: open  t: icons  q: quit";
pub const HINTS_MODAL: &str = "j/k: scroll  any other key or click: close";

// Empty state message
pub const EMPTY_PAGE_MESSAGE: &str = "No reference entries loaded";

// UI Layout Constants
/// Modal width as a percentage of the viewport
pub const MODAL_WIDTH_PERCENT: u16 = 70;
/// Modal height as a percentage of the viewport
pub const MODAL_HEIGHT_PERCENT: u16 = 80;
/// Minimum viewport width to render the page at all
pub const PAGE_MIN_WIDTH: u16 = 20;
