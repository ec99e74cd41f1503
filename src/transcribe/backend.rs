//! Core `TranscriptionBackend` trait and `HttpBackend` implementation.
//!
//! `HttpBackend` speaks the upload contract of the practice backend: one
//! `multipart/form-data` POST to `{base_url}/upload` carrying the audio blob
//! and the reference sentence, answered by a [`BackendReport`] JSON body.
//! All connection details come from [`BackendConfig`]; nothing is hardcoded.
//!
//! | Form field       | Content                                  |
//! |------------------|------------------------------------------|
//! | `file`           | audio bytes, with the payload's file name |
//! | `reference_text` | the sentence the speaker read             |
//! | `language`       | the raw language selector value           |

use async_trait::async_trait;
use thiserror::Error;

use crate::config::BackendConfig;
use crate::transcribe::types::{AudioPayload, BackendReport};

// ---------------------------------------------------------------------------
// TranscribeError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the transcription backend.
#[derive(Debug, Clone, Error)]
pub enum TranscribeError {
    /// HTTP transport or connection error.
    #[error("transcription backend unreachable: {0}")]
    Unavailable(String),

    /// The request did not complete within the configured timeout.
    #[error("transcription request timed out")]
    Timeout,

    /// The backend answered with a non-success HTTP status.
    #[error("transcription backend returned HTTP {0}")]
    Status(u16),

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse transcription response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TranscribeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranscribeError::Timeout
        } else {
            TranscribeError::Unavailable(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TranscriptionBackend trait
// ---------------------------------------------------------------------------

/// Async trait for transcription services.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn TranscriptionBackend>`).
///
/// # Arguments
/// * `audio`     – The recorded clip to transcribe.
/// * `reference` – The sentence the speaker was asked to read; forwarded so
///                 the backend can grade on its side too.
/// * `language`  – Raw language selector value, forwarded verbatim.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        reference: &str,
        language: &str,
    ) -> Result<BackendReport, TranscribeError>;
}

// Compile-time assertion: Box<dyn TranscriptionBackend> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn TranscriptionBackend>) {}
};

// ---------------------------------------------------------------------------
// HttpBackend
// ---------------------------------------------------------------------------

/// Uploads audio to the practice backend over HTTP.
///
/// One request per call, no retries: a failed upload surfaces immediately so
/// the speaker can decide whether to re-record or resubmit.
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Build an `HttpBackend` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl TranscriptionBackend for HttpBackend {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        reference: &str,
        language: &str,
    ) -> Result<BackendReport, TranscribeError> {
        let url = format!("{}/upload", self.config.base_url);

        let part = reqwest::multipart::Part::bytes(audio.bytes.clone())
            .file_name(audio.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("reference_text", reference.to_string())
            .text("language", language.to_string());

        log::debug!(
            "transcribe: POST {url} ({} bytes, language {language})",
            audio.bytes.len()
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscribeError::Status(status.as_u16()));
        }

        let report: BackendReport = response
            .json()
            .await
            .map_err(|e| TranscribeError::Parse(e.to_string()))?;

        Ok(report)
    }
}

// ---------------------------------------------------------------------------
// MockBackend  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured reply without any network,
/// and counts how many times it was called so tests can verify the
/// one-request-per-submission contract.
#[cfg(test)]
pub struct MockBackend {
    reply: Result<BackendReport, TranscribeError>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockBackend {
    /// Create a mock that always returns `Ok(report)`.
    pub fn ok(report: BackendReport) -> Self {
        Self {
            reply: Ok(report),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: TranscribeError) -> Self {
        Self {
            reply: Err(error),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of `transcribe` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl TranscriptionBackend for MockBackend {
    async fn transcribe(
        &self,
        _audio: &AudioPayload,
        _reference: &str,
        _language: &str,
    ) -> Result<BackendReport, TranscribeError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.reply.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
