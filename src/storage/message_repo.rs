use crate::domain::message::{IngestOutcome, Message, NewMessage};
use crate::domain::query::{MessageFilter, MessageQuery, MessageStats, SenderCount};
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::message::MessageRecord;

#[derive(Clone, Debug)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a message keyed by `message_id`, relying on the primary key
    /// to resolve races between concurrent inserts of the same id. The
    /// existing row always wins; the incoming payload is discarded on
    /// conflict.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the insert fails for any reason
    /// other than the uniqueness constraint.
    pub async fn insert(&self, message: &NewMessage, created_at: &str) -> Result<IngestOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (message_id, from_msisdn, to_msisdn, ts, text, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(message_id) DO NOTHING
            "#,
        )
        .bind(&message.message_id)
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.ts)
        .bind(&message.text)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(IngestOutcome::Duplicate)
        } else {
            Ok(IngestOutcome::Created)
        }
    }

    /// Runs a filtered, paginated listing. The count and the page are
    /// derived from the same predicate list; the count ignores pagination.
    ///
    /// # Errors
    /// Returns `AppError::Database` if either query fails.
    pub async fn list(&self, query: &MessageQuery) -> Result<(Vec<Message>, i64)> {
        let (where_clause, params) = render_filters(&query.filters);

        let count_sql = format!("SELECT COUNT(*) FROM messages{where_clause}");
        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);
        for param in &params {
            count_query = count_query.bind(param);
        }
        let (total,) = count_query.fetch_one(&self.pool).await?;

        let page_sql = format!(
            "SELECT message_id, from_msisdn, to_msisdn, ts, text, created_at \
             FROM messages{where_clause} \
             ORDER BY ts ASC, message_id ASC \
             LIMIT ? OFFSET ?"
        );
        let mut page_query = sqlx::query_as::<_, MessageRecord>(&page_sql);
        for param in &params {
            page_query = page_query.bind(param);
        }
        let records = page_query.bind(query.limit).bind(query.offset).fetch_all(&self.pool).await?;

        Ok((records.into_iter().map(Message::from).collect(), total))
    }

    /// Computes the corpus-wide aggregate snapshot. Top-sender ties are
    /// broken by sender address ascending.
    ///
    /// # Errors
    /// Returns `AppError::Database` if a query fails.
    pub async fn stats(&self) -> Result<MessageStats> {
        let (total_messages,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM messages").fetch_one(&self.pool).await?;

        let (senders_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(DISTINCT from_msisdn) FROM messages").fetch_one(&self.pool).await?;

        let top_senders: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT from_msisdn, COUNT(*) AS message_count
            FROM messages
            GROUP BY from_msisdn
            ORDER BY message_count DESC, from_msisdn ASC
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let (first_message_ts, last_message_ts): (Option<String>, Option<String>) =
            sqlx::query_as("SELECT MIN(ts), MAX(ts) FROM messages").fetch_one(&self.pool).await?;

        Ok(MessageStats {
            total_messages,
            senders_count,
            messages_per_sender: top_senders
                .into_iter()
                .map(|(from, count)| SenderCount { from, count })
                .collect(),
            first_message_ts,
            last_message_ts,
        })
    }
}

/// Translates the typed predicate list into a WHERE clause and its
/// positional parameters, in filter order.
fn render_filters(filters: &[MessageFilter]) -> (String, Vec<String>) {
    let mut fragments = Vec::with_capacity(filters.len());
    let mut params = Vec::with_capacity(filters.len());

    for filter in filters {
        match filter {
            MessageFilter::Sender(from) => {
                fragments.push("from_msisdn = ?");
                params.push(from.clone());
            }
            MessageFilter::Since(ts) => {
                fragments.push("ts >= ?");
                params.push(ts.clone());
            }
            MessageFilter::TextContains(q) => {
                fragments.push("LOWER(COALESCE(text, '')) LIKE ?");
                params.push(format!("%{}%", q.to_lowercase()));
            }
        }
    }

    if fragments.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", fragments.join(" AND ")), params)
    }
}
