use crate::storage::DbPool;
use std::time::Duration;
use tokio::time::timeout;

#[derive(Clone, Debug)]
pub struct HealthService {
    pool: DbPool,
    secret_configured: bool,
    db_timeout: Duration,
}

impl HealthService {
    #[must_use]
    pub const fn new(pool: DbPool, secret_configured: bool, db_timeout_ms: u64) -> Self {
        Self { pool, secret_configured, db_timeout: Duration::from_millis(db_timeout_ms) }
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    /// Returns a string describing the failure if the database is
    /// unreachable or the probe times out.
    pub async fn check_db(&self) -> Result<(), String> {
        match timeout(self.db_timeout, sqlx::query("SELECT 1").execute(&self.pool)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(format!("Database connection failed: {e:?}")),
            Err(_) => Err("Database connection timed out".to_string()),
        }
    }

    /// Checks that the webhook shared secret is provisioned. Without it
    /// every delivery would be rejected, so readiness must fail.
    ///
    /// # Errors
    /// Returns a string describing the failure if the secret is unset.
    pub fn check_secret(&self) -> Result<(), String> {
        if self.secret_configured {
            Ok(())
        } else {
            Err("webhook secret is not configured".to_string())
        }
    }
}
