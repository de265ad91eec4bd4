use crate::domain::query::MessageStats;
use crate::error::Result;
use crate::storage::message_repo::MessageRepository;

#[derive(Clone, Debug)]
pub struct StatsService {
    repo: MessageRepository,
}

impl StatsService {
    #[must_use]
    pub const fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    /// Computes a fresh point-in-time snapshot on every call; nothing is
    /// cached or maintained incrementally. Top-sender ties are broken by
    /// sender address ascending.
    ///
    /// # Errors
    /// Returns `AppError::Database` if a query fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn stats(&self) -> Result<MessageStats> {
        self.repo.stats().await
    }
}
