use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ListOptions;

/// Configuration for the pantry tracker.
///
/// Stored as `pantry.toml` in the root directory. Every field has a default,
/// so an absent or empty file behaves like `Config::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// File name of the backing store, relative to the root.
    store: String,

    /// File name of the generated grocery list report, relative to the root.
    grocery_list: String,

    /// The quantity cutoff below which an item goes on the grocery list.
    minimum_inventory: i64,

    /// Multiplier applied to the grocery list's estimated total.
    ///
    /// When unset, the multiplier follows `minimum_inventory` (the
    /// historical behaviour of the report).
    cost_multiplier: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            grocery_list: default_grocery_list(),
            minimum_inventory: default_minimum_inventory(),
            cost_multiplier: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The file name of the backing store.
    #[must_use]
    pub fn store_file(&self) -> &str {
        &self.store
    }

    /// The file name of the grocery list report.
    #[must_use]
    pub fn grocery_file(&self) -> &str {
        &self.grocery_list
    }

    /// The grocery list options described by this configuration.
    #[must_use]
    pub const fn list_options(&self) -> ListOptions {
        ListOptions {
            minimum_inventory: self.minimum_inventory,
            cost_multiplier: self.cost_multiplier,
        }
    }
}

fn default_store() -> String {
    "pantry.csv".to_string()
}

fn default_grocery_list() -> String {
    "grocery_list.txt".to_string()
}

const fn default_minimum_inventory() -> i64 {
    2
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_store")]
        store: String,

        #[serde(default = "default_grocery_list")]
        grocery_list: String,

        #[serde(default = "default_minimum_inventory")]
        minimum_inventory: i64,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        cost_multiplier: Option<f64>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                store,
                grocery_list,
                minimum_inventory,
                cost_multiplier,
            } => Self {
                store,
                grocery_list,
                minimum_inventory,
                cost_multiplier,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            store: config.store,
            grocery_list: config.grocery_list,
            minimum_inventory: config.minimum_inventory,
            cost_multiplier: config.cost_multiplier,
        }
    }
}
