//! Card catalog: identifier → record lookup

use super::record::CardRecord;
use crate::deck::card_id::CardId;
use std::collections::BTreeMap;

/// Read-only lookup of card meanings, keyed by identifier
///
/// Built once at startup. The first record for an identifier wins; later
/// duplicates are refused by [`insert`](CardCatalog::insert).
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    records: BTreeMap<CardId, CardRecord>,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning `false` if its identifier is already present
    pub fn insert(&mut self, record: CardRecord) -> bool {
        if self.records.contains_key(&record.id) {
            return false;
        }
        self.records.insert(record.id, record);
        true
    }

    /// Look up a card; `None` when the table has no row for it
    pub fn get(&self, id: CardId) -> Option<&CardRecord> {
        self.records.get(&id)
    }

    /// Card name, or `"Card N"` when the record is missing
    pub fn name_of(&self, id: CardId) -> String {
        match self.get(id) {
            Some(record) => record.name.clone(),
            None => format!("Card {}", id),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deck identifiers with no row in the table
    pub fn missing(&self) -> Vec<CardId> {
        CardId::all()
            .filter(|id| !self.records.contains_key(id))
            .collect()
    }
}

impl FromIterator<CardRecord> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CardRecord>>(iter: I) -> Self {
        let mut catalog = CardCatalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}
