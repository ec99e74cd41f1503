//! Transcription backend client.
//!
//! The heavy lifting (audio decoding, speech recognition) happens in an
//! external service; this module is the thin, typed client for it.
//!
//! | Item                     | Responsibility                               |
//! |--------------------------|----------------------------------------------|
//! | [`TranscriptionBackend`] | Object-safe interface the session depends on |
//! | [`HttpBackend`]          | Production client: multipart upload over HTTP |
//! | [`AudioPayload`]         | Opaque audio blob plus file name              |
//! | [`BackendReport`]        | The backend's JSON reply                      |
//!
//! The trait seam exists so the submission flow can be tested without a
//! running backend; `MockBackend` (test-only) stands in for the service.

pub mod backend;
pub mod types;

pub use backend::{HttpBackend, TranscribeError, TranscriptionBackend};
pub use types::{AudioPayload, BackendReport};

#[cfg(test)]
pub use backend::MockBackend;
