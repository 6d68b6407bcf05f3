//! Birthday greeting generation.
//!
//! The persona and prompt are fixed: every greeting is a warm, personal
//! Swedish message opening with "Grattis på födelsedagen", varied only
//! by the contact's name and relation.

use grattis_core::error::Result;
use grattis_core::traits::Provider;
use grattis_core::types::Message;

const PERSONA: &str = "You are my personal assistant and you write my birthday messages. \
The messages should be warm, personal, and loving, and unique to the person's relation \
to me. The messages should be in Swedish. Make it sound like it is written by me. \
Humanize the messages. You can use emojis if you think it is appropriate.";

fn prompt_for(name: &str, relation: &str) -> String {
    format!(
        "Write a warm and heartfelt birthday message for my {relation} named {name}. \
         Start with Happy Birthday in Swedish (Grattis på födelsedagen). \
         You don't need to mention their name."
    )
}

/// Conversation sent to the provider for one contact.
pub fn greeting_messages(name: &str, relation: &str) -> Vec<Message> {
    vec![
        Message::system(PERSONA),
        Message::user(prompt_for(name, relation)),
    ]
}

/// Generate one greeting. `Ok(None)` means the service returned no
/// usable content (absent or whitespace-only); the caller logs that and
/// skips the contact. No retry.
pub async fn generate_birthday_message(
    provider: &dyn Provider,
    name: &str,
    relation: &str,
) -> Result<Option<String>> {
    let messages = greeting_messages(name, relation);
    let content = provider.chat(&messages).await?;
    Ok(content
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grattis_core::types::Role;

    #[test]
    fn test_prompt_names_relation_and_person() {
        let prompt = prompt_for("Anna", "mother");
        assert!(prompt.contains("my mother"));
        assert!(prompt.contains("named Anna"));
        assert!(prompt.contains("Grattis på födelsedagen"));
    }

    #[test]
    fn test_conversation_is_persona_then_prompt() {
        let messages = greeting_messages("Anna", "mother");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("Swedish"));
        assert_eq!(messages[1].role, Role::User);
    }
}
