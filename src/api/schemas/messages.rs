use crate::domain::message::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ListMessagesParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub from: Option<String>,
    pub since: Option<String>,
    pub q: Option<String>,
}

const fn default_limit() -> i64 {
    50
}

/// The wire shape of a stored message; `created_at` stays internal.
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub message_id: String,
    pub from: String,
    pub to: String,
    pub ts: String,
    pub text: Option<String>,
}

impl From<Message> for MessageView {
    fn from(message: Message) -> Self {
        Self {
            message_id: message.message_id,
            from: message.from,
            to: message.to,
            ts: message.ts,
            text: message.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListMessagesResponse {
    pub data: Vec<MessageView>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
