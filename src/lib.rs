//! Flat-file kitchen inventory tracking.
//!
//! Provisions are records in a comma-delimited text file. The catalog is
//! loaded into memory at the start of a command, edited in place, and
//! written back as a whole. A grocery list is derived from the catalog by
//! filtering items whose quantity on hand has dropped below a minimum.

pub mod domain;
pub use domain::{
    Catalog, Config, GroceryList, ListOptions, NameError, Provision, RecordNotFound, StockStatus,
    UpdateOutcome,
};

/// Flat-file persistence for the catalog.
pub mod storage;
pub use storage::{LoadError, MalformedRecord, Store};
