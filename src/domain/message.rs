use crate::error::{AppError, Result};
use serde::Deserialize;

/// Upper bound on the free-text body, counted in characters.
pub const MAX_TEXT_CHARS: usize = 4096;

/// A message as persisted: immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    pub message_id: String,
    pub from: String,
    pub to: String,
    pub ts: String,
    pub text: Option<String>,
    pub created_at: String,
}

/// The inbound webhook payload shape. `created_at` is server-assigned at
/// insert time and is deliberately absent here.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub message_id: String,
    pub from: String,
    pub to: String,
    pub ts: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl NewMessage {
    /// Checks shape constraints first, then MSISDN semantics, so a
    /// malformed payload and a well-formed-but-invalid address stay
    /// distinguishable.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for shape violations and
    /// `AppError::InvalidAddress` for a malformed `from` or `to`.
    pub fn validate(&self) -> Result<()> {
        if self.message_id.is_empty() {
            return Err(AppError::Validation("message_id must not be empty".to_string()));
        }

        if let Some(text) = &self.text {
            if text.chars().count() > MAX_TEXT_CHARS {
                return Err(AppError::Validation(format!("text must be at most {MAX_TEXT_CHARS} characters")));
            }
        }

        if !is_valid_msisdn(&self.from) || !is_valid_msisdn(&self.to) {
            return Err(AppError::InvalidAddress);
        }

        Ok(())
    }
}

/// A loose E.164-style check: a leading `+` followed by one or more
/// decimal digits. Length and country codes are not validated.
#[must_use]
pub fn is_valid_msisdn(value: &str) -> bool {
    value
        .strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Result of an ingestion attempt. Both variants are successes at the
/// boundary; the distinction exists for metrics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Created,
    Duplicate,
}

impl IngestOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Duplicate => "duplicate",
        }
    }

    #[must_use]
    pub const fn is_duplicate(self) -> bool {
        matches!(self, Self::Duplicate)
    }
}

/// What the pipeline reports upward after a successful ingest.
#[derive(Debug, Clone)]
pub struct IngestReceipt {
    pub message_id: String,
    pub outcome: IngestOutcome,
}
