#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Local transcript for the assistant chat page.
///
/// Messages live only in memory; clearing the chat also starts a new chat id
/// in the configuration store (done by the page, not here).
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub author: Author,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// BEM modifier used by the chat page for message bubbles.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl ChatState {
    /// Append a user message. Blank input is ignored; returns whether a
    /// message was added.
    pub fn push_user(&mut self, text: &str) -> bool {
        let content = text.trim();
        if content.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: Author::User,
            content: content.to_owned(),
        });
        true
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
