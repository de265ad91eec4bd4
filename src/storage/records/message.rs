#[derive(sqlx::FromRow)]
pub(crate) struct MessageRecord {
    pub message_id: String,
    pub from_msisdn: String,
    pub to_msisdn: String,
    pub ts: String,
    pub text: Option<String>,
    pub created_at: String,
}

impl From<MessageRecord> for crate::domain::message::Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            message_id: record.message_id,
            from: record.from_msisdn,
            to: record.to_msisdn,
            ts: record.ts,
            text: record.text,
            created_at: record.created_at,
        }
    }
}
