use dashmap::DashMap;
use std::collections::BTreeMap;

/// Counter names incremented by the request handlers.
pub mod counters {
    pub const WEBHOOK_REQUESTS: &str = "webhook_requests_total";
    pub const WEBHOOK_INVALID_SIGNATURE: &str = "webhook_invalid_signature_total";
    pub const WEBHOOK_INVALID_MSISDN: &str = "webhook_invalid_msisdn_total";
    pub const WEBHOOK_CREATED: &str = "webhook_created_total";
    pub const WEBHOOK_DUPLICATES: &str = "webhook_duplicates_total";
    pub const MESSAGES_REQUESTS: &str = "messages_requests_total";
    pub const STATS_REQUESTS: &str = "stats_requests_total";
}

/// Process-wide counter registry backing the `/metrics` endpoint.
///
/// Increments are atomic per counter; a snapshot is a point-in-time copy
/// and may interleave with concurrent increments.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    counters: DashMap<&'static str, u64>,
}

impl MetricsRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, name: &'static str) {
        *self.counters.entry(name).or_insert(0) += 1;
    }

    /// Returns a sorted copy of all counters.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<&'static str, u64> {
        self.counters.iter().map(|entry| (*entry.key(), *entry.value())).collect()
    }

    /// Renders counters as one `name value` line each, sorted by name.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.snapshot() {
            out.push_str(name);
            out.push(' ');
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}
