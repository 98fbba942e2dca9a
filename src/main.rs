use anyhow::{Context, Result};

use refdeck::catalog::Catalog;
use refdeck::config::Config;
use refdeck::{logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle --generate-config before anything else touches the terminal
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logging::init(&config.logging)?;

    let catalog = match &config.catalog.path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            Catalog::from_json(&text)
                .with_context(|| format!("Failed to load catalog file: {}", path.display()))?
        }
        None => Catalog::builtin().context("Failed to load bundled catalog")?,
    };

    log::info!(
        "catalog loaded: {} categories, {} entries",
        catalog.categories().len(),
        catalog.entry_count()
    );

    // Run the TUI application
    ui::run_app(&catalog, &config).await?;

    Ok(())
}
