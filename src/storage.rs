//! Flat-file persistence for the catalog.
//!
//! The backing store is a plain UTF-8 text file with one record per line in
//! the fixed field order `name,quantity,unitCost`. There is no header row
//! and no quoting; names therefore cannot contain commas, which the domain
//! layer enforces at construction.

/// Line-level encoding and decoding of provision records.
pub mod record;
mod store;

pub use record::MalformedRecord;
pub use store::{LoadError, Store};
