use std::path::Path;

use clap::Parser;
use tracing::instrument;

use super::{load_config, open_store, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Report whether an item is in stock")]
pub struct Search {
    /// The item name (exact, case-sensitive)
    name: String,
}

impl Search {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let catalog = store.load_or_empty();

        // "In stock" means present with a positive quantity; an item that has
        // run out is reported separately so the distinction is visible.
        if catalog.in_stock(&self.name) {
            println!("{}", format!("{}: in stock", self.name).success());
        } else if let Some(provision) = catalog.get(&self.name) {
            println!(
                "{}",
                format!(
                    "{}: out of stock (quantity {})",
                    self.name,
                    provision.quantity()
                )
                .warning()
            );
        } else {
            println!("{}: not in the inventory", self.name);
        }

        Ok(())
    }
}
