#![allow(dead_code)]

use courier_server::api::{self, AppState};
use courier_server::config::{Config, HealthConfig, LogFormat, ServerConfig, TelemetryConfig, WebhookConfig};
use courier_server::storage::{self, DbPool};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Once;

pub const TEST_SECRET: &str = "test-webhook-secret";

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("courier_server=debug".parse().unwrap())
            .add_directive("sqlx=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

pub fn get_test_config() -> Config {
    let db_path = std::env::temp_dir().join(format!("courier-test-{}.db", uuid::Uuid::new_v4()));
    Config {
        database_url: format!("sqlite:{}", db_path.display()),
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0 },
        webhook: WebhookConfig { secret: Some(TEST_SECRET.to_string()) },
        health: HealthConfig { db_timeout_ms: 2000 },
        telemetry: TelemetryConfig { log_format: LogFormat::Text },
    }
}

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub pool: DbPool,
    pub config: Config,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(get_test_config()).await
    }

    pub async fn spawn_with_config(config: Config) -> Self {
        setup_tracing();

        let pool = storage::init_pool(&config.database_url).await.expect("failed to open test database");
        storage::init_schema(&pool).await.expect("failed to create schema");

        let state = AppState::new(config.clone(), pool.clone());
        let app = api::app_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("failed to bind listener");
        let addr = listener.local_addr().expect("listener has no local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server crashed");
        });

        Self { base_url: format!("http://{addr}"), client: reqwest::Client::new(), pool, config }
    }

    pub async fn post_webhook(&self, body: &str, signature: Option<&str>) -> reqwest::Response {
        let mut request = self.client.post(format!("{}/webhook", self.base_url)).body(body.to_string());
        if let Some(signature) = signature {
            request = request.header("X-Signature", signature);
        }
        request.send().await.expect("request failed")
    }

    pub async fn post_signed(&self, body: &str) -> reqwest::Response {
        let signature = sign(TEST_SECRET, body.as_bytes());
        self.post_webhook(body, Some(&signature)).await
    }

    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        self.client.get(format!("{}{}", self.base_url, path_and_query)).send().await.expect("request failed")
    }
}

pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

pub fn message_body(message_id: &str, from: &str, ts: &str, text: Option<&str>) -> String {
    serde_json::json!({
        "message_id": message_id,
        "from": from,
        "to": "+15551230002",
        "ts": ts,
        "text": text
    })
    .to_string()
}
