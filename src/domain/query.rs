/// A single typed predicate over stored messages. Filters compose
/// conjunctively; the storage layer translates each into its native query
/// mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFilter {
    /// Exact match on the sender address.
    Sender(String),
    /// Inclusive lexical lower bound on `ts`.
    Since(String),
    /// Case-insensitive substring match on `text`, with absent text
    /// treated as the empty string.
    TextContains(String),
}

/// A validated, paginated read over the message store.
#[derive(Debug, Clone)]
pub struct MessageQuery {
    pub limit: i64,
    pub offset: i64,
    pub filters: Vec<MessageFilter>,
}

/// Per-sender message count, used for the top-senders ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderCount {
    pub from: String,
    pub count: i64,
}

/// Corpus-wide aggregate snapshot.
#[derive(Debug, Clone)]
pub struct MessageStats {
    pub total_messages: i64,
    pub senders_count: i64,
    pub messages_per_sender: Vec<SenderCount>,
    pub first_message_ts: Option<String>,
    pub last_message_ts: Option<String>,
}
