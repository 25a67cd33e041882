//! Prompt for the external interpretation
//!
//! The request is a fixed system instruction followed by one user message
//! naming the seeker, the drawn cards (by name, in draw order) and the
//! question.

use super::message::Message;
use super::seeker::Seeker;
use crate::catalog::table::CardCatalog;
use crate::selection::spread::Spread;

/// Default system instruction
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful and very wise assistant that interprets tarot card spreads from the Gilded Reverie Lenormand Expanded Edition using the simple nine card spread.";

/// Default remark appended to every successful external interpretation
pub const DEFAULT_CLOSING_REMARK: &str = " . I hope this interpretation provides to you some clarity. Thanks for using our App and have a nice day!";

/// The two messages of an interpretation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingPrompt {
    pub system: String,
    pub user: String,
    /// Card names in draw order, as embedded in `user`
    pub card_names: Vec<String>,
}

impl ReadingPrompt {
    pub fn build(
        system_prompt: &str,
        seeker: &Seeker,
        spread: &Spread,
        catalog: &CardCatalog,
    ) -> Self {
        let card_names: Vec<String> = spread.iter().map(|id| catalog.name_of(id)).collect();
        let user = format!(
            "My name is {} and I've drawn a 3x3 tarot spread: {}. I want to know: {}.",
            seeker.name(),
            card_names.join(", "),
            seeker.question()
        );
        Self {
            system: system_prompt.to_string(),
            user,
            card_names,
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(&self.user)]
    }
}

/// Trim the generated text and append the closing remark
pub fn with_closing_remark(text: &str, closing_remark: &str) -> String {
    format!("{}{}", text.trim(), closing_remark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::CardRecord;
    use crate::deck::card_id::CardId;
    use crate::reading::message::Role;

    fn id(n: u32) -> CardId {
        CardId::new(n).unwrap()
    }

    fn spread() -> Spread {
        Spread::new([1, 2, 3, 4, 5, 6, 7, 8, 40].map(id))
    }

    fn catalog() -> CardCatalog {
        [
            (1, "Rider"),
            (2, "Clover"),
            (3, "Ship"),
            (4, "House"),
            (5, "Tree"),
            (6, "Clouds"),
            (7, "Snake"),
            (8, "Coffin"),
        ]
        .into_iter()
        .map(|(n, name)| CardRecord::new(id(n), name, "", ""))
        .collect()
    }

    #[test]
    fn test_user_message_embeds_names_in_order() {
        let seeker = Seeker::new("Ada", "Should I take the job").unwrap();
        let prompt = ReadingPrompt::build(DEFAULT_SYSTEM_PROMPT, &seeker, &spread(), &catalog());

        assert_eq!(
            prompt.user,
            "My name is Ada and I've drawn a 3x3 tarot spread: Rider, Clover, Ship, House, \
             Tree, Clouds, Snake, Coffin, Card 40. I want to know: Should I take the job."
        );
        assert_eq!(prompt.card_names.len(), 9);
    }

    #[test]
    fn test_messages_are_system_then_user() {
        let seeker = Seeker::new("Ada", "Why").unwrap();
        let prompt = ReadingPrompt::build("Be brief.", &seeker, &spread(), &catalog());
        let messages = prompt.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "Be brief.");
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_closing_remark_appended_after_trim() {
        let text = with_closing_remark("  The cards smile on you.\n", DEFAULT_CLOSING_REMARK);
        assert!(text.starts_with("The cards smile on you. . I hope"));
        assert!(text.ends_with("have a nice day!"));
    }
}
