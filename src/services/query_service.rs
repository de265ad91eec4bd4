use crate::domain::message::Message;
use crate::domain::query::{MessageFilter, MessageQuery};
use crate::error::{AppError, Result};
use crate::storage::message_repo::MessageRepository;

/// Pagination bounds enforced before any store access.
const LIMIT_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

#[derive(Clone, Debug)]
pub struct QueryService {
    repo: MessageRepository,
}

impl QueryService {
    #[must_use]
    pub const fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    /// Lists messages matching the optional filters, ordered by `ts` then
    /// `message_id`, together with the total match count ignoring
    /// pagination. Empty filter values are treated as absent.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for out-of-range `limit`/`offset`
    /// (checked before touching the store) and `AppError::Database` if the
    /// query fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
        from: Option<String>,
        since: Option<String>,
        q: Option<String>,
    ) -> Result<(Vec<Message>, i64)> {
        if !LIMIT_RANGE.contains(&limit) {
            return Err(AppError::Validation("limit must be between 1 and 100".to_string()));
        }
        if offset < 0 {
            return Err(AppError::Validation("offset must be >= 0".to_string()));
        }

        let mut filters = Vec::new();
        if let Some(from) = from.filter(|v| !v.is_empty()) {
            filters.push(MessageFilter::Sender(from));
        }
        if let Some(since) = since.filter(|v| !v.is_empty()) {
            filters.push(MessageFilter::Since(since));
        }
        if let Some(q) = q.filter(|v| !v.is_empty()) {
            filters.push(MessageFilter::TextContains(q));
        }

        self.repo.list(&MessageQuery { limit, offset, filters }).await
    }
}
