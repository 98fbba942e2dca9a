//! Event handling and key bindings

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

use super::app::App;
use super::layout::LayoutManager;

/// Handle all user input events. Returns true when the event changed state.
pub fn handle_events(event: Event, app: &mut App) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if app.modal.is_open() {
                handle_modal_keys(key, app)
            } else {
                handle_browse_keys(key, app)
            }
        }
        Event::Mouse(mouse) => handle_mouse(mouse, app),
        Event::Resize(width, height) => {
            app.viewport = Size::new(width, height);
            true
        }
        _ => false,
    }
}

/// Handle events while the modal is open
fn handle_modal_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.modal.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.modal.scroll_down(),
        KeyCode::PageUp => app.modal.page_up(),
        KeyCode::PageDown => app.modal.page_down(),
        KeyCode::Home => app.modal.scroll_to_top(),
        KeyCode::End => app.modal.scroll_to_bottom(),
        // Any other key is an activation while the modal is open and closes it
        _ => app.modal.close(&mut app.page),
    }
    true
}

/// Handle normal navigation and actions
fn handle_browse_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_tile();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_tile();
            true
        }
        KeyCode::Char('J') => {
            app.next_section();
            true
        }
        KeyCode::Char('K') => {
            app.previous_section();
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_selected(app),
        KeyCode::Char('t') => {
            app.icons.cycle_icon_theme();
            true
        }
        _ => false,
    }
}

fn handle_mouse(mouse: MouseEvent, app: &mut App) -> bool {
    if !app.mouse_enabled {
        return false;
    }

    if app.modal.is_open() {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                app.modal.scroll_up();
                true
            }
            MouseEventKind::ScrollDown => {
                app.modal.scroll_down();
                true
            }
            // A click anywhere, the modal surface included, closes it
            MouseEventKind::Down(MouseButton::Left) => {
                app.modal.close(&mut app.page);
                true
            }
            _ => false,
        }
    } else {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => handle_page_click(mouse, app),
            MouseEventKind::ScrollDown => {
                app.next_tile();
                true
            }
            MouseEventKind::ScrollUp => {
                app.previous_tile();
                true
            }
            _ => false,
        }
    }
}

/// Translate a click on the section list into a tile activation.
fn handle_page_click(mouse: MouseEvent, app: &mut App) -> bool {
    let screen = Rect::new(0, 0, app.viewport.width, app.viewport.height);
    let area = LayoutManager::main_layout(screen)[0];

    // Clicks on the border or outside the list are inert
    if !(mouse.row > area.y && mouse.row < area.y + area.height.saturating_sub(1)) {
        return false;
    }
    if !(mouse.column > area.x && mouse.column < area.x + area.width.saturating_sub(1)) {
        return false;
    }

    let local_index = (mouse.row - area.y - 1) as usize;
    let clicked_row = app.list_state.offset() + local_index;

    // Guard against clicks beyond the laid out rows
    if clicked_row >= app.rows.len() {
        return false;
    }

    match app.tile_at_row(clicked_row) {
        Some((container, tile)) => {
            app.select_row(clicked_row);
            activate_tile(app, container, tile)
        }
        // Headings, rules and blank rows do not activate anything
        None => false,
    }
}

/// Shared activation path for keyboard and mouse: read the tile record and
/// hand its payload to the modal.
pub fn activate_tile(app: &mut App, container: usize, tile: usize) -> bool {
    let Some(view) = app.page.tile(container, tile).cloned() else {
        return false;
    };

    app.modal.open(
        &mut app.page,
        view.entry,
        view.accent_color,
        &view.category_label,
        app.viewport,
    );
    true
}

fn activate_selected(app: &mut App) -> bool {
    match app.selected_tile_position() {
        Some((container, tile)) => activate_tile(app, container, tile),
        None => false,
    }
}
