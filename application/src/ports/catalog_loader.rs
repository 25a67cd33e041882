//! Card catalog loader port
//!
//! The meaning table is read once at startup; where it comes from is an
//! infrastructure concern.

use reverie_domain::CardCatalog;
use thiserror::Error;

/// Errors while loading the card table
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Card table not found: {0}")]
    NotFound(String),

    #[error("Could not read card table {path}: {message}")]
    Unreadable { path: String, message: String },
}

/// Source of the static card meaning table
pub trait CardCatalogLoader: Send + Sync {
    /// Load every record. Rows that cannot be parsed are skipped.
    fn load(&self) -> Result<CardCatalog, CatalogError>;
}
