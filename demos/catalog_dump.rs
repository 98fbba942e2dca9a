use refdeck::catalog::Catalog;
use refdeck::ui::modal::ModalContent;

fn main() -> anyhow::Result<()> {
    // Load the bundled demo catalog
    let catalog = Catalog::builtin()?;

    for category in catalog.categories() {
        println!("{} ({} entries)", category.name, category.entries.len());

        for entry in &category.entries {
            let content = ModalContent::from_entry(entry, &category.name);
            println!(
                "  {:<12} {} [{} bullets, {} separators]",
                content.title,
                content.subtitle,
                content.bullet_count(),
                content.separator_count()
            );
        }
    }

    Ok(())
}
