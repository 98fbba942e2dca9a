use ratatui::style::Color;

use refdeck::catalog::{Catalog, RawCategory, RawEntry};
use refdeck::constants::{CONTAINER_ACTION, CONTAINER_MANEUVER, CONTAINER_QUALITIES};
use refdeck::ui::binder::SectionBinder;
use refdeck::ui::page::{Page, SECTION_BINDINGS};

fn catalog_with_actions(titles: &[&str]) -> Catalog {
    Catalog::load(vec![RawCategory {
        name: "action".to_string(),
        entries: titles
            .iter()
            .map(|title| RawEntry {
                title: Some(title.to_string()),
                ..RawEntry::default()
            })
            .collect(),
    }])
}

#[test]
fn test_bind_fills_container_in_order() {
    let catalog = catalog_with_actions(&["Attack", "Ability", "Skill"]);
    let mut page = Page::standard(&[]);

    SectionBinder::bind(&mut page, &catalog, "action", CONTAINER_ACTION, "Action");

    let container = page.container(CONTAINER_ACTION).unwrap();
    let titles: Vec<_> = container.tiles.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Attack", "Ability", "Skill"]);

    // Every tile inherits the container background as its accent
    for tile in &container.tiles {
        assert_eq!(tile.accent_color, container.background);
        assert_eq!(tile.category_label, "Action");
    }
}

#[test]
fn test_bind_missing_container_is_a_no_op() {
    let catalog = catalog_with_actions(&["Attack"]);
    let mut page = Page::standard(&[]);

    SectionBinder::bind(&mut page, &catalog, "action", "no-such-container", "Action");

    assert_eq!(page.tile_count(), 0);
}

#[test]
fn test_bind_missing_category_leaves_container_empty() {
    let catalog = catalog_with_actions(&["Attack"]);
    let mut page = Page::standard(&[]);

    SectionBinder::bind(&mut page, &catalog, "qualities", CONTAINER_QUALITIES, "Qualities");

    assert!(page.container(CONTAINER_QUALITIES).unwrap().tiles.is_empty());
    assert_eq!(page.tile_count(), 0);
}

#[test]
fn test_bind_only_touches_named_container() {
    let catalog = catalog_with_actions(&["Attack", "Skill"]);
    let mut page = Page::standard(&[]);

    SectionBinder::bind(&mut page, &catalog, "action", CONTAINER_ACTION, "Action");

    assert_eq!(page.container(CONTAINER_ACTION).unwrap().tiles.len(), 2);
    assert!(page.container(CONTAINER_MANEUVER).unwrap().tiles.is_empty());
    assert_eq!(page.tile_count(), 2);
}

#[test]
fn test_standard_page_has_known_containers() {
    let page = Page::standard(&[]);

    let ids: Vec<_> = page.containers().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "basic-action",
            "basic-attack",
            "basic-incidental",
            "basic-maneuver",
            "basic-qualities",
        ]
    );

    // The standard binding table matches the page one to one
    for binding in SECTION_BINDINGS {
        assert!(page.container(binding.container_id).is_some());
    }
}

#[test]
fn test_standard_page_cycles_short_palettes() {
    let palette = [Color::Rgb(1, 2, 3), Color::Rgb(4, 5, 6)];
    let page = Page::standard(&palette);

    let backgrounds: Vec<_> = page.containers().iter().map(|c| c.background).collect();
    assert_eq!(
        backgrounds,
        vec![
            Color::Rgb(1, 2, 3),
            Color::Rgb(4, 5, 6),
            Color::Rgb(1, 2, 3),
            Color::Rgb(4, 5, 6),
            Color::Rgb(1, 2, 3),
        ]
    );
}
