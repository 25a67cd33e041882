//! Card meaning record

use crate::deck::card_id::CardId;
use serde::{Deserialize, Serialize};

/// Static description of one card (Entity)
///
/// Field names follow the meaning table's header row; the short aliases
/// are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(rename = "card_number", alias = "identifier")]
    pub id: CardId,
    #[serde(rename = "card_name", alias = "name")]
    pub name: String,
    #[serde(rename = "card_meaning", alias = "meaning")]
    pub meaning: String,
    #[serde(rename = "card_detail", alias = "detail")]
    pub detail: String,
}

impl CardRecord {
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        meaning: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            meaning: meaning.into(),
            detail: detail.into(),
        }
    }
}
