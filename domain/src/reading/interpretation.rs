//! Static interpretation built from the card table alone

use crate::catalog::table::CardCatalog;
use crate::deck::card_id::CardId;
use crate::selection::spread::Spread;

/// Write-up for a single card, or a placeholder if the table has no row
pub fn card_write_up(id: CardId, catalog: &CardCatalog) -> String {
    match catalog.get(id) {
        Some(record) => format!(
            "Card {}: {}\nMeaning: {}\n\nDetails: {}\n\n",
            id, record.name, record.meaning, record.detail
        ),
        None => format!("Card: {}\nNo details found in the provided CSV.\n\n", id),
    }
}

/// Concatenated write-ups for the whole spread, in draw order
pub fn static_interpretation(spread: &Spread, catalog: &CardCatalog) -> String {
    spread.iter().map(|id| card_write_up(id, catalog)).collect()
}
