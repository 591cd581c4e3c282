use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub name: String,
    pub avatar: String,
    pub phone: String,
    pub email: String,
}

/// Property a conversation is about
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRef {
    pub title: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub participant: Participant,
    pub property: PropertyRef,
    pub unread_count: u32,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Conversation list with search and a selected thread
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    conversations: Vec<Conversation>,
    selected: Option<String>,
    query: String,
}

impl Inbox {
    /// The first conversation starts selected.
    pub fn new(conversations: Vec<Conversation>) -> Self {
        let selected = conversations.first().map(|c| c.id.clone());
        Self {
            conversations,
            selected,
            query: String::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Conversations whose participant name or property title matches
    pub fn filtered(&self) -> Vec<&Conversation> {
        let needle = self.query.to_lowercase();
        self.conversations
            .iter()
            .filter(|c| {
                c.participant.name.to_lowercase().contains(&needle)
                    || c.property.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.conversations.iter().any(|c| c.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn send(&mut self, text: &str) -> Option<&Message> {
        self.send_at(text, Utc::now())
    }

    /// Append a message from the user to the selected conversation.
    /// Whitespace-only text is dropped.
    pub fn send_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.selected.clone()?;
        let conversation = self.conversations.iter_mut().find(|c| c.id == id)?;

        conversation.messages.push(Message {
            id: now.timestamp_millis().to_string(),
            sender: Sender::User,
            content: text.to_string(),
            sent_at: now,
        });
        debug!(conversation = %id, "Message sent");
        conversation.messages.last()
    }
}
