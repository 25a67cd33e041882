//! CSV-backed card meaning table.
//!
//! The file has a header row naming the columns `card_number`, `card_name`,
//! `card_meaning` and `card_detail` (or the short forms `identifier`,
//! `name`, `meaning`, `detail`). Rows that cannot be parsed, and repeated
//! identifiers after the first, are skipped with a warning.

use reverie_application::ports::catalog_loader::{CardCatalogLoader, CatalogError};
use reverie_domain::{CardCatalog, CardRecord};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads the card table from a CSV file
pub struct CsvCardCatalogLoader {
    path: PathBuf,
}

impl CsvCardCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, message: impl ToString) -> CatalogError {
        CatalogError::Unreadable {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl CardCatalogLoader for CsvCardCatalogLoader {
    fn load(&self) -> Result<CardCatalog, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound(self.path.display().to_string()));
        }

        let file = std::fs::File::open(&self.path).map_err(|e| self.unreadable(e))?;
        let catalog = read_catalog(file).map_err(|e| self.unreadable(e))?;

        info!(
            "Loaded {} card records from {}",
            catalog.len(),
            self.path.display()
        );
        let missing = catalog.missing();
        if !missing.is_empty() {
            debug!("{} cards have no table entry", missing.len());
        }
        Ok(catalog)
    }
}

/// Parse a CSV stream into a catalog, skipping bad and duplicate rows
///
/// Fails only when the header row itself cannot be read.
pub fn read_catalog<R: Read>(reader: R) -> Result<CardCatalog, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    reader.headers()?;

    let mut catalog = CardCatalog::new();
    for (index, row) in reader.deserialize::<CardRecord>().enumerate() {
        // Line 1 is the header
        let line = index + 2;
        match row {
            Ok(record) => {
                let id = record.id;
                if !catalog.insert(record) {
                    warn!("Skipping duplicate card {} on line {}", id, line);
                }
            }
            Err(e) => warn!("Skipping malformed card row on line {}: {}", line, e),
        }
    }
    Ok(catalog)
}
