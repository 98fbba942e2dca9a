//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{ModalDialog, SectionList, StatusBar};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::constants::PAGE_MIN_WIDTH;

/// Run the main TUI application
pub async fn run_app(catalog: &Catalog, config: &Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let mut app = App::new(catalog, config);
    app.viewport = terminal.size()?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so the loop stays responsive
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            let _handled = handle_events(event, app);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    // Too narrow to draw anything sensible
    if f.area().width < PAGE_MIN_WIDTH {
        return;
    }

    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());

    // Render components
    SectionList::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    // Render the modal last so it sits on top of everything
    ModalDialog::render(f, app);
}
