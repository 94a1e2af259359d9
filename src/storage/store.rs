//! The durable text file backing the catalog.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    domain::Catalog,
    storage::record::{self, MalformedRecord},
};

/// A flat-file store of provision records.
///
/// The store holds only a path; every operation opens the file afresh, does
/// its work, and releases the handle. There is no protection against
/// concurrent writers; the last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the file at the given path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Counts the non-empty lines currently in the backing file.
    ///
    /// A file that cannot be read logs a warning and counts as an empty
    /// store.
    #[must_use]
    pub fn count(&self) -> usize {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => content.lines().filter(|line| !line.trim().is_empty()).count(),
            Err(e) => {
                tracing::warn!("cannot read store at {}: {e}", self.path.display());
                0
            }
        }
    }

    /// Loads the full record set from the backing file.
    ///
    /// Lines are read until end of input; blank (empty or whitespace-only)
    /// lines are skipped, so the loaded catalog holds exactly
    /// [`count`](Self::count) provisions.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if the backing file does not exist
    /// - [`LoadError::Io`] for any other I/O failure
    /// - [`LoadError::Malformed`] if a non-empty line is not a valid record
    pub fn load(&self) -> Result<Catalog, LoadError> {
        let file = File::open(&self.path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Io(io_error),
        })?;

        let reader = BufReader::new(file);
        let mut catalog = Catalog::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            // Same blank-line predicate as `count`, so the two always agree.
            if line.trim().is_empty() {
                continue;
            }
            catalog.push(record::parse(line, index + 1)?);
        }

        Ok(catalog)
    }

    /// Loads the catalog, treating an unavailable store as empty.
    ///
    /// A missing or unreadable backing file is logged and yields an empty
    /// catalog; the caller proceeds rather than aborting. Commands that must
    /// distinguish "empty" from "unreadable" use [`load`](Self::load)
    /// directly.
    #[must_use]
    pub fn load_or_empty(&self) -> Catalog {
        match self.load() {
            Ok(catalog) => catalog,
            Err(LoadError::NotFound) => {
                tracing::warn!(
                    "no store at {}; starting with an empty catalog",
                    self.path.display()
                );
                Catalog::new()
            }
            Err(e) => {
                tracing::error!("failed to load store at {}: {e}", self.path.display());
                Catalog::new()
            }
        }
    }

    /// Writes the full record set to the backing file.
    ///
    /// The file is truncated and rewritten unconditionally with one line per
    /// provision, preserving catalog order and the fixed field order.
    /// There is no atomic rename or backup: a crash mid-write can truncate
    /// the store. This matches the store's last-write-wins contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save(&self, catalog: &Catalog) -> io::Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for provision in catalog.provisions() {
            writeln!(writer, "{}", record::format(provision))?;
        }

        writer.flush()
    }
}

/// Errors that can occur when loading the catalog from the backing file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The backing file does not exist.
    #[error("store file not found")]
    NotFound,
    /// The backing file exists but could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A line in the backing file is not a valid record.
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::Provision;

    fn sample_catalog() -> Catalog {
        [
            Provision::new("Flour", 5, 2.0).unwrap(),
            Provision::new("Sugar", 1, 1.5).unwrap(),
            Provision::new("Rice", 0, 3.0).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    fn temp_store() -> (TempDir, Store) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let store = Store::new(tmp.path().join("pantry.csv"));
        (tmp, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_tmp, store) = temp_store();
        let catalog = sample_catalog();

        store.save(&catalog).unwrap();

        assert_eq!(store.load().unwrap(), catalog);
    }

    #[test]
    fn save_writes_one_line_per_record_in_field_order() {
        let (_tmp, store) = temp_store();
        store.save(&sample_catalog()).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Flour,5,2\nSugar,1,1.5\nRice,0,3\n");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let (_tmp, store) = temp_store();
        assert!(matches!(store.load().unwrap_err(), LoadError::NotFound));
    }

    #[test]
    fn load_or_empty_treats_a_missing_file_as_an_empty_store() {
        let (_tmp, store) = temp_store();
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn load_skips_empty_lines() {
        let (_tmp, store) = temp_store();
        std::fs::write(store.path(), "Flour,5,2\n\nRice,0,3\n\n").unwrap();

        let catalog = store.load().unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_reports_the_line_number_of_a_malformed_record() {
        let (_tmp, store) = temp_store();
        std::fs::write(store.path(), "Flour,5,2\nSugar,one,1.5\n").unwrap();

        match store.load().unwrap_err() {
            LoadError::Malformed(error) => assert_eq!(error.line(), 2),
            other => panic!("expected a malformed record error, got {other:?}"),
        }
    }

    #[test]
    fn load_and_count_agree_on_whitespace_only_lines() {
        let (_tmp, store) = temp_store();
        std::fs::write(store.path(), "Flour,5,2\n \nRice,0,3\n\t\n").unwrap();

        let catalog = store.load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(store.count(), catalog.len());
    }

    #[test]
    fn count_matches_the_number_of_non_empty_lines() {
        let (_tmp, store) = temp_store();
        std::fs::write(store.path(), "Flour,5,2\n\nRice,0,3\n").unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.count(), store.load().unwrap().len());
    }

    #[test]
    fn count_of_a_missing_file_is_zero() {
        let (_tmp, store) = temp_store();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn save_truncates_the_previous_contents() {
        let (_tmp, store) = temp_store();
        store.save(&sample_catalog()).unwrap();

        let smaller: Catalog = [Provision::new("Flour", 5, 2.0).unwrap()]
            .into_iter()
            .collect();
        store.save(&smaller).unwrap();

        assert_eq!(store.load().unwrap(), smaller);
    }

    #[test]
    fn no_op_edit_leaves_the_file_byte_identical() {
        let (_tmp, store) = temp_store();
        store.save(&sample_catalog()).unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let mut catalog = store.load().unwrap();
        catalog.set_quantity("Sugar", 1).unwrap();
        store.save(&catalog).unwrap();

        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn loads_files_with_windows_line_endings() {
        let (_tmp, store) = temp_store();
        std::fs::write(store.path(), "Flour,5,2\r\nRice,0,3\r\n").unwrap();

        let catalog = store.load().unwrap();
        assert_eq!(catalog.provisions()[1].name(), "Rice");
    }
}
