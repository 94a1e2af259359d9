use std::path::Path;

use clap::Parser;
use pantry::{Catalog, ListOptions, Provision};
use tracing::instrument;

use super::{
    load_config, open_store,
    terminal::{is_narrow, Colorize},
};

#[derive(Debug, Parser, Default)]
#[command(about = "Show the catalog and how much of it needs restocking")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let catalog = store.load_or_empty();
        let options = config.list_options();

        if catalog.is_empty() {
            println!("No provisions found yet. Build the pantry with 'pantry fill'.");
            return Ok(());
        }

        let low = below_minimum(&catalog, options);

        match self.output {
            OutputFormat::Json => Self::output_json(&catalog, options, low)?,
            OutputFormat::Table => {
                if self.quiet {
                    println!("{} {low}", catalog.len());
                } else {
                    Self::output_table(&catalog, options, low);
                }
            }
        }

        Ok(())
    }

    fn output_json(catalog: &Catalog, options: ListOptions, low: usize) -> anyhow::Result<()> {
        use serde_json::json;

        let provisions: Vec<_> = catalog
            .provisions()
            .iter()
            .map(|provision| {
                json!({
                    "name": provision.name(),
                    "quantity": provision.quantity(),
                    "unit_cost": provision.unit_cost(),
                    "total_cost": provision.total_cost(),
                    "low": provision.quantity() < options.minimum_inventory,
                })
            })
            .collect();

        let output = json!({
            "total": catalog.len(),
            "below_minimum": low,
            "minimum_inventory": options.minimum_inventory,
            "provisions": provisions,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_table(catalog: &Catalog, options: ListOptions, low: usize) {
        if is_narrow() {
            for provision in catalog.provisions() {
                println!("{}", compact_line(provision, options));
            }
        } else {
            let width = catalog
                .provisions()
                .iter()
                .map(|p| p.name().len())
                .max()
                .unwrap_or(0)
                .max("Item".len());

            println!(
                "{}",
                format!("{:<width$}  {:>8}  {:>10}", "Item", "Quantity", "Unit cost").dim()
            );
            for provision in catalog.provisions() {
                let line = format!(
                    "{:<width$}  {:>8}  {:>10.2}",
                    provision.name(),
                    provision.quantity(),
                    provision.unit_cost()
                );
                if provision.quantity() < options.minimum_inventory {
                    println!("{}", line.warning());
                } else {
                    println!("{line}");
                }
            }
        }

        println!();
        println!(
            "{} provision(s), {low} below the minimum of {}",
            catalog.len(),
            options.minimum_inventory
        );
    }
}

fn below_minimum(catalog: &Catalog, options: ListOptions) -> usize {
    catalog
        .provisions()
        .iter()
        .filter(|p| p.quantity() < options.minimum_inventory)
        .count()
}

fn compact_line(provision: &Provision, options: ListOptions) -> String {
    let line = format!(
        "{}: {} @ {:.2}",
        provision.name(),
        provision.quantity(),
        provision.unit_cost()
    );
    if provision.quantity() < options.minimum_inventory {
        line.warning()
    } else {
        line
    }
}
