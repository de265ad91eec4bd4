use crate::domain::message::{IngestReceipt, NewMessage};
use crate::error::{AppError, Result};
use crate::storage::message_repo::MessageRepository;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

type HmacSha256 = Hmac<Sha256>;

/// The ingestion pipeline: authenticate, validate, write idempotently.
#[derive(Clone, Debug)]
pub struct IngestService {
    repo: MessageRepository,
    secret: Option<String>,
}

impl IngestService {
    #[must_use]
    pub const fn new(repo: MessageRepository, secret: Option<String>) -> Self {
        Self { repo, secret }
    }

    /// Runs the full pipeline over the raw request bytes. The signature is
    /// checked before the payload is inspected; nothing is written on any
    /// failure path.
    ///
    /// # Errors
    /// Returns `AppError::InvalidSignature` for a missing or mismatched
    /// signature, `AppError::Validation` for a malformed payload,
    /// `AppError::InvalidAddress` for a bad `from`/`to`, and
    /// `AppError::Database` if the insert fails.
    #[tracing::instrument(err(level = "warn"), skip(self, raw_body, signature))]
    pub async fn ingest(&self, raw_body: &[u8], signature: Option<&str>) -> Result<IngestReceipt> {
        self.verify_signature(raw_body, signature)?;

        let payload: NewMessage = serde_json::from_slice(raw_body)
            .map_err(|e| AppError::Validation(format!("malformed payload: {e}")))?;
        payload.validate()?;

        let created_at =
            OffsetDateTime::now_utc().format(&Rfc3339).map_err(|_| AppError::Internal)?;

        let outcome = self.repo.insert(&payload, &created_at).await?;

        Ok(IngestReceipt { message_id: payload.message_id, outcome })
    }

    /// Verifies the hex-encoded HMAC-SHA256 signature over the exact raw
    /// bytes. Comparison is constant-time; an unconfigured secret rejects
    /// every delivery.
    fn verify_signature(&self, raw_body: &[u8], signature: Option<&str>) -> Result<()> {
        let secret = self.secret.as_deref().ok_or(AppError::InvalidSignature)?;
        let signature = signature.ok_or(AppError::InvalidSignature)?;
        let provided = hex::decode(signature).map_err(|_| AppError::InvalidSignature)?;

        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AppError::Internal)?;
        mac.update(raw_body);
        let expected = mac.finalize().into_bytes();

        if expected.len() != provided.len() {
            return Err(AppError::InvalidSignature);
        }
        if bool::from(expected.as_slice().ct_eq(provided.as_slice())) {
            Ok(())
        } else {
            Err(AppError::InvalidSignature)
        }
    }
}
