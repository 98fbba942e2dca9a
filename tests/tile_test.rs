use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::Color;

use refdeck::catalog::{Catalog, Entry, RawCategory, RawEntry};
use refdeck::config::Config;
use refdeck::constants::{DEFAULT_ICON, TITLE_PLACEHOLDER};
use refdeck::ui::tile::TileRenderer;
use refdeck::ui::{events, App};

fn sample_entry() -> Entry {
    Entry {
        title: "Attack".to_string(),
        icon: "crossed-swords".to_string(),
        subtitle: "Melee or ranged attack".to_string(),
        description: "Perform a melee or ranged attack".to_string(),
        reference: "CRB, pgs. 210-212.".to_string(),
        bullets: vec!["1. <b>Declare an attack</b>".to_string()],
    }
}

fn test_catalog() -> Catalog {
    Catalog::load(vec![RawCategory {
        name: "action".to_string(),
        entries: vec![
            RawEntry {
                title: Some("Attack".to_string()),
                icon: Some("crossed-swords".to_string()),
                subtitle: Some("Melee or ranged attack".to_string()),
                ..RawEntry::default()
            },
            RawEntry {
                title: Some("Skill".to_string()),
                ..RawEntry::default()
            },
        ],
    }])
}

#[test]
fn test_create_tile_resolves_fields() {
    let background = Color::Rgb(54, 69, 92);
    let tile = TileRenderer::create_tile(&sample_entry(), "Action", background);

    assert_eq!(tile.title, "Attack");
    assert_eq!(tile.subtitle, "Melee or ranged attack");
    assert_eq!(tile.icon, "icon-crossed-swords");
    assert_eq!(tile.category_label, "Action");
    assert_eq!(tile.accent_color, background);
}

#[test]
fn test_create_tile_defaults_for_empty_entry() {
    let tile = TileRenderer::create_tile(&Entry::default(), "Action", Color::Reset);

    assert_eq!(tile.title, TITLE_PLACEHOLDER);
    assert_eq!(tile.icon, format!("icon-{DEFAULT_ICON}"));
    assert_eq!(tile.subtitle, "");
}

#[test]
fn test_create_tile_preserves_entry() {
    let entry = sample_entry();
    let tile = TileRenderer::create_tile(&entry, "Action", Color::Reset);

    // The tile carries the full entry, so activation needs no lookup
    assert_eq!(tile.entry, entry);
}

#[test]
fn test_activation_opens_modal_with_tile_payload() {
    let catalog = test_catalog();
    let config = Config::default();
    let mut app = App::new(&catalog, &config);

    let (container, tile) = app.selected_tile_position().unwrap();
    let accent = app.page.tile(container, tile).unwrap().accent_color;

    assert!(events::activate_tile(&mut app, container, tile));

    let state = app.modal.state();
    assert!(state.is_open);
    assert!(app.page.modal_open);
    assert_eq!(state.accent_color, accent);
    assert_eq!(state.category_label, "Action");
    assert_eq!(state.entry.as_ref().map(|e| e.title.as_str()), Some("Attack"));
}

#[test]
fn test_activation_out_of_range_is_inert() {
    let catalog = test_catalog();
    let config = Config::default();
    let mut app = App::new(&catalog, &config);

    assert!(!events::activate_tile(&mut app, 4, 99));
    assert!(!app.modal.is_open());
    assert!(!app.page.modal_open);
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_click_on_tile_opens_modal() {
    let catalog = test_catalog();
    let config = Config::default();
    let mut app = App::new(&catalog, &config);

    // Rows: heading, rule, then the two action tiles. With the list border,
    // the first tile sits on screen row 3.
    assert!(events::handle_events(click(5, 3), &mut app));

    let state = app.modal.state();
    assert!(state.is_open);
    assert_eq!(state.entry.as_ref().map(|e| e.title.as_str()), Some("Attack"));
}

#[test]
fn test_click_on_heading_is_inert() {
    let catalog = test_catalog();
    let config = Config::default();
    let mut app = App::new(&catalog, &config);

    // Screen row 1 is the heading of the first container
    assert!(!events::handle_events(click(5, 1), &mut app));
    assert!(!app.modal.is_open());
}

#[test]
fn test_click_closes_open_modal_anywhere() {
    let catalog = test_catalog();
    let config = Config::default();
    let mut app = App::new(&catalog, &config);

    assert!(events::handle_events(click(5, 3), &mut app));
    assert!(app.modal.is_open());

    // A second click, even dead center over the modal body, closes it
    assert!(events::handle_events(click(40, 12), &mut app));
    assert!(!app.modal.is_open());
    assert!(!app.page.modal_open);
}
