//! Card meaning table adapters.
//!
//! Provides [`CsvCardCatalogLoader`], which implements the
//! [`CardCatalogLoader`](reverie_application::CardCatalogLoader) port.

mod csv_loader;

pub use csv_loader::{CsvCardCatalogLoader, read_catalog};
