use std::path::Path;

use clap::Parser;
use pantry::{GroceryList, StockStatus};
use tracing::instrument;

use super::{
    load_config, open_store,
    terminal::Colorize,
};

#[derive(Debug, Parser)]
#[command(about = "Derive the grocery list and write the dated report")]
pub struct Grocery {
    /// Quantity cutoff below which an item goes on the list
    #[arg(long)]
    minimum: Option<i64>,

    /// Multiplier applied to the estimated total
    #[arg(long)]
    multiplier: Option<f64>,
}

impl Grocery {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let catalog = store.load_or_empty();

        let mut options = config.list_options();
        if let Some(minimum) = self.minimum {
            options.minimum_inventory = minimum;
        }
        if let Some(multiplier) = self.multiplier {
            options.cost_multiplier = Some(multiplier);
        }

        let list = GroceryList::derive(&catalog, options);

        for status in list.statuses() {
            if status.status() == StockStatus::Ok {
                println!("{}", format!("{}: Inventory OK", status.name()).success());
            }
        }

        let path = root.join(config.grocery_file());
        list.save_report(&path).map_err(|e| {
            anyhow::anyhow!("Failed to write grocery list to {}: {e}", path.display())
        })?;

        println!("Grocery List Created!");
        println!("{}", format!("  {} item(s) at {}", list.len(), path.display()).dim());

        Ok(())
    }
}
