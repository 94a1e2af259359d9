//! Domain models for pantry inventory tracking.
//!
//! This module contains the core domain types: provisions, the in-memory
//! catalog, grocery list derivation, and configuration.

/// Provision record and name validation.
pub mod provision;
pub use provision::{NameError, Provision};

mod catalog;
pub use catalog::{Catalog, RecordNotFound, UpdateOutcome};

/// Grocery list derivation and report rendering.
pub mod grocery;
pub use grocery::{GroceryList, ItemStatus, ListOptions, StockStatus};

mod config;
pub use config::Config;
