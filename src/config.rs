use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "COURIER_DATABASE_URL", default_value = "sqlite:courier.db")]
    pub database_url: String,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub webhook: WebhookConfig,

    #[command(flatten)]
    pub health: HealthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "COURIER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "COURIER_PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct WebhookConfig {
    /// Shared secret for webhook signature verification.
    /// Leaving it unset makes the readiness probe fail and every delivery
    /// is rejected as unsigned.
    #[arg(long, env = "COURIER_WEBHOOK_SECRET")]
    pub secret: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for the readiness database probe
    #[arg(long, env = "COURIER_HEALTH_DB_TIMEOUT_MS", default_value_t = 2000)]
    pub db_timeout_ms: u64,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "COURIER_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
