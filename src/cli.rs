//! Command-line interface for the pantry inventory tracker.

use std::path::{Path, PathBuf};

mod fill;
mod grocery;
mod search;
mod status;
mod terminal;

use clap::ArgAction;
use fill::Fill;
use grocery::Grocery;
use pantry::{Config, GroceryList, Store, UpdateOutcome};
use search::Search;
use status::Status;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the directory holding the pantry files
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show inventory status (default)
    Status(Status),

    /// Initialize a pantry configuration file
    Init,

    /// Build the inventory from scratch, one bin at a time
    Fill(Fill),

    /// Generate the grocery list report
    Grocery(Grocery),

    /// Search for an item by name
    Search(Search),

    /// Adjust the quantity on hand for an item
    ///
    /// The grocery list report is regenerated afterwards, since the new
    /// quantity may move the item on or off the list.
    Quantity(Quantity),

    /// Adjust the cost per unit for an item
    Cost(Cost),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(&root)?,
            Self::Init => Init::run(&root)?,
            Self::Fill(command) => command.run(&root)?,
            Self::Grocery(command) => command.run(&root)?,
            Self::Search(command) => command.run(&root)?,
            Self::Quantity(command) => command.run(&root)?,
            Self::Cost(command) => command.run(&root)?,
        }
        Ok(())
    }
}

/// Loads the configuration from the root, falling back to defaults.
fn load_config(root: &Path) -> Config {
    let path = root.join("pantry.toml");
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// The store described by the configuration, rooted at `root`.
fn open_store(root: &Path, config: &Config) -> Store {
    Store::new(root.join(config.store_file()))
}

struct Init {}

impl Init {
    #[instrument]
    fn run(root: &Path) -> anyhow::Result<()> {
        let config_path = root.join("pantry.toml");
        if config_path.exists() {
            anyhow::bail!(
                "Configuration already exists at {}",
                config_path.display()
            );
        }

        let config = Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create pantry.toml: {e}"))?;

        println!("Initialized pantry in {}", root.display());
        println!("  Created: pantry.toml");
        println!();
        println!("Next steps:");
        println!("  pantry fill");

        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Quantity {
    /// The item name (exact, case-sensitive)
    name: String,

    /// The new quantity on hand
    quantity: i64,
}

impl Quantity {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let mut catalog = store.load_or_empty();

        match catalog.set_quantity(&self.name, self.quantity) {
            Ok(UpdateOutcome::Updated) => {
                store.save(&catalog)?;
                tracing::info!("updated quantity for {}", self.name);
                println!("{} now has quantity {}", self.name, self.quantity);
            }
            Ok(UpdateOutcome::Unchanged) => {
                println!(
                    "{} already has quantity {}; nothing to update",
                    self.name, self.quantity
                );
            }
            Err(e) => anyhow::bail!("{e}"),
        }

        regenerate_grocery_list(root, &config, &catalog)
    }
}

#[derive(Debug, clap::Parser)]
pub struct Cost {
    /// The item name (exact, case-sensitive)
    name: String,

    /// The new cost per unit
    cost: f64,
}

impl Cost {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let mut catalog = store.load_or_empty();

        match catalog.set_unit_cost(&self.name, self.cost) {
            Ok(UpdateOutcome::Updated) => {
                store.save(&catalog)?;
                tracing::info!("updated unit cost for {}", self.name);
                println!("{} now costs {:.2} per unit", self.name, self.cost);
            }
            Ok(UpdateOutcome::Unchanged) => {
                println!(
                    "{} already costs {:.2} per unit; nothing to update",
                    self.name, self.cost
                );
            }
            Err(e) => anyhow::bail!("{e}"),
        }

        Ok(())
    }
}

/// Rewrites the grocery list report from the given catalog.
fn regenerate_grocery_list(
    root: &Path,
    config: &Config,
    catalog: &pantry::Catalog,
) -> anyhow::Result<()> {
    let list = GroceryList::derive(catalog, config.list_options());
    let path = root.join(config.grocery_file());
    list.save_report(&path)
        .map_err(|e| anyhow::anyhow!("Failed to write grocery list to {}: {e}", path.display()))?;
    println!("Grocery list refreshed at {}", path.display());
    Ok(())
}
