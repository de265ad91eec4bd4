use crate::domain::query::MessageStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_messages: i64,
    pub senders_count: i64,
    pub messages_per_sender: Vec<SenderCountView>,
    pub first_message_ts: Option<String>,
    pub last_message_ts: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SenderCountView {
    pub from: String,
    pub count: i64,
}

impl From<MessageStats> for StatsResponse {
    fn from(stats: MessageStats) -> Self {
        Self {
            total_messages: stats.total_messages,
            senders_count: stats.senders_count,
            messages_per_sender: stats
                .messages_per_sender
                .into_iter()
                .map(|s| SenderCountView { from: s.from, count: s.count })
                .collect(),
            first_message_ts: stats.first_message_ts,
            last_message_ts: stats.last_message_ts,
        }
    }
}
