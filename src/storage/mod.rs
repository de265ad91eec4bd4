use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub mod message_repo;
pub mod records;


pub type DbPool = Pool<Sqlite>;

/// Initializes the database connection pool, creating the database file if
/// it does not exist.
///
/// # Errors
/// Returns `sqlx::Error` if the URL is malformed or the connection fails.
pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new().max_connections(5).connect_with(options).await
}

/// Creates the messages table and its indexes if they do not exist.
/// Safe to run on every process start.
///
/// # Errors
/// Returns `sqlx::Error` if a statement fails.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            message_id  TEXT PRIMARY KEY,
            from_msisdn TEXT NOT NULL,
            to_msisdn   TEXT NOT NULL,
            ts          TEXT NOT NULL,
            text        TEXT,
            created_at  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_ts ON messages(ts, message_id)").execute(pool).await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_from ON messages(from_msisdn)").execute(pool).await?;

    Ok(())
}
