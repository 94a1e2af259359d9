use std::path::Path;

use clap::Parser;
use dialoguer::Input;
use pantry::{Catalog, Provision};
use tracing::instrument;

use super::{load_config, open_store};

#[derive(Debug, Parser)]
#[command(about = "Build a full replacement inventory, prompting per bin")]
pub struct Fill {
    /// How many bins to fill; prompted for when omitted
    #[arg(long)]
    bins: Option<usize>,
}

impl Fill {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);

        let bins = match self.bins {
            Some(bins) => bins,
            None => Input::new()
                .with_prompt("How many bins are in the pantry?")
                .interact_text()?,
        };

        let mut catalog = Catalog::new();
        for bin in 1..=bins {
            catalog.push(prompt_provision(bin)?);
        }

        // The whole set replaces whatever the store held before.
        store.save(&catalog)?;
        println!("Pantry file has been saved!");

        Ok(())
    }
}

fn prompt_provision(bin: usize) -> anyhow::Result<Provision> {
    let name: String = Input::new()
        .with_prompt(format!("Bin {bin} item name"))
        .validate_with(|input: &String| {
            Provision::new(input.clone(), 0, 0.0)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let quantity: i64 = Input::new()
        .with_prompt("Quantity on hand")
        .interact_text()?;

    let unit_cost: f64 = Input::new().with_prompt("Cost per unit").interact_text()?;

    Provision::new(name, quantity, unit_cost).map_err(Into::into)
}
