use leptos::*;

use crate::api::{ApiClient, ChatMessage, ChatSender};
use crate::utils::{storage, time};

pub const TRANSCRIPT_KEY: &str = "chat_messages";

const GREETING: &str = "Hello! I'm your HR assistant. How can I help you today?";
const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting to the server. Please try again later.";

/// Reactive chat transcript, mirrored to storage after every mutation.
#[derive(Clone, Copy)]
pub struct ChatStore {
    messages: RwSignal<Vec<ChatMessage>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self {
            messages: create_rw_signal(load_transcript()),
        }
    }

    pub fn messages(&self) -> RwSignal<Vec<ChatMessage>> {
        self.messages
    }

    pub fn push(&self, message: ChatMessage) {
        self.messages.update(|messages| messages.push(message));
        self.save();
    }

    pub fn clear(&self) {
        self.messages.set(seed_transcript());
        if let Err(err) = storage::remove_item(TRANSCRIPT_KEY) {
            log::warn!("failed to clear transcript: {}", err);
        }
    }

    fn save(&self) {
        let raw = encode_transcript(&self.messages.get_untracked());
        if let Err(err) = storage::set_item(TRANSCRIPT_KEY, &raw) {
            log::warn!("failed to persist transcript: {}", err);
        }
    }
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_transcript(messages: &[ChatMessage]) -> String {
    serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_transcript(raw: &str) -> Option<Vec<ChatMessage>> {
    serde_json::from_str::<Vec<ChatMessage>>(raw)
        .ok()
        .filter(|messages| !messages.is_empty())
}

fn seed_transcript() -> Vec<ChatMessage> {
    vec![bot_message(GREETING)]
}

fn load_transcript() -> Vec<ChatMessage> {
    match storage::get_item(TRANSCRIPT_KEY) {
        Ok(Some(raw)) => decode_transcript(&raw).unwrap_or_else(seed_transcript),
        _ => seed_transcript(),
    }
}

pub fn user_message(text: &str) -> ChatMessage {
    ChatMessage {
        text: text.to_string(),
        sender: ChatSender::User,
        timestamp: time::clock_timestamp(),
    }
}

pub fn bot_message(text: &str) -> ChatMessage {
    ChatMessage {
        text: text.to_string(),
        sender: ChatSender::Bot,
        timestamp: time::clock_timestamp(),
    }
}

pub fn fallback_reply() -> ChatMessage {
    bot_message(FALLBACK_REPLY)
}

/// The user message is appended before the relay and never rolled back.
/// A failed relay appends exactly one fallback bot message.
pub async fn relay(api: &ApiClient, store: ChatStore, text: String) {
    store.push(user_message(&text));
    match api.send_chat_message(&text).await {
        Ok(Some(reply)) => store.push(bot_message(&reply)),
        Ok(None) => {}
        Err(error) => {
            log::warn!("assistant relay failed: {}", error);
            store.push(fallback_reply());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn transcript_codec_round_trips() {
        let messages = vec![
            user_message("what is my leave balance?"),
            bot_message("You have 12 days left."),
        ];
        let raw = encode_transcript(&messages);
        assert_eq!(decode_transcript(&raw), Some(messages));
    }

    #[test]
    fn decode_rejects_garbage_and_empty() {
        assert_eq!(decode_transcript("not json"), None);
        assert_eq!(decode_transcript("[]"), None);
    }

    #[test]
    fn store_seeds_greeting_and_clear_reseeds() {
        let runtime = create_runtime();
        let store = ChatStore::new();
        let initial = store.messages().get_untracked();
        assert_eq!(initial.len(), 1);
        assert_eq!(initial[0].sender, crate::api::ChatSender::Bot);

        store.push(user_message("hello"));
        assert_eq!(store.messages().get_untracked().len(), 2);

        store.clear();
        let cleared = store.messages().get_untracked();
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].sender, crate::api::ChatSender::Bot);
        runtime.dispose();
    }
}
