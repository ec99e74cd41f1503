//! Practice submission flow — one recorded attempt, graded.
//!
//! [`PracticeSession`] ties the scorer to a [`TranscriptionBackend`].  It is
//! stateless between submissions; every call to [`submit`](PracticeSession::submit)
//! is a complete, independent attempt.
//!
//! # Submission flow
//!
//! ```text
//! submit(audio, reference)
//!   ├─ blank reference?  → Err(EmptyReference)  — nothing is uploaded
//!   ├─ backend.transcribe(audio, reference, language)   (one request, no retry)
//!   ├─ score(reference, transcript) locally
//!   │    └─ backend's accuracy disagrees → warn, keep the local figure
//!   └─ PracticeOutcome { transcript, result, backend_report }
//! ```
//!
//! The local score is authoritative.  The backend grades on its side too and
//! its report is kept in the outcome, but the numbers shown to the speaker
//! always come from this crate's scorer, so results are consistent no matter
//! which backend produced the transcript.

use std::sync::Arc;

use thiserror::Error;

use crate::score::{score, ComparisonResult, Language};
use crate::transcribe::{AudioPayload, BackendReport, TranscribeError, TranscriptionBackend};

/// Largest backend-vs-local accuracy difference treated as agreement.
const ACCURACY_TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors that can surface from a submission.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The reference text was empty or whitespace-only.  Rejected before any
    /// network traffic so a pointless upload never happens.
    #[error("reference text must not be empty")]
    EmptyReference,

    /// The transcription backend call failed.
    #[error("transcription failed: {0}")]
    Backend(#[from] TranscribeError),
}

// ---------------------------------------------------------------------------
// PracticeOutcome
// ---------------------------------------------------------------------------

/// Everything a caller needs to show the speaker after one attempt.
#[derive(Debug, Clone)]
pub struct PracticeOutcome {
    /// What the backend heard in the audio.
    pub transcript: String,
    /// The authoritative, locally computed comparison.
    pub result: ComparisonResult,
    /// The backend's own report, kept for inspection.
    pub backend_report: BackendReport,
}

// ---------------------------------------------------------------------------
// PracticeSession
// ---------------------------------------------------------------------------

/// Runs practice submissions against a transcription backend.
pub struct PracticeSession {
    backend: Arc<dyn TranscriptionBackend>,
    /// Raw language selector value.  Forwarded verbatim to the backend and
    /// parsed leniently for local scoring.
    language: String,
}

impl PracticeSession {
    pub fn new(backend: Arc<dyn TranscriptionBackend>, language: impl Into<String>) -> Self {
        Self {
            backend,
            language: language.into(),
        }
    }

    /// Submit one recorded attempt and grade it.
    ///
    /// # Errors
    ///
    /// * [`SessionError::EmptyReference`] — `reference` is blank; the backend
    ///   is never contacted.
    /// * [`SessionError::Backend`] — the upload or transcription failed.  The
    ///   request is not retried; the caller decides whether to resubmit.
    pub async fn submit(
        &self,
        audio: &AudioPayload,
        reference: &str,
    ) -> Result<PracticeOutcome, SessionError> {
        if reference.trim().is_empty() {
            return Err(SessionError::EmptyReference);
        }

        let report = self
            .backend
            .transcribe(audio, reference, &self.language)
            .await?;

        log::debug!("session: backend heard {:?}", report.transcribed_text);

        // The reference was validated above, so scoring cannot reject it.
        let language = Language::parse(&self.language);
        log::debug!("session: scoring with {} rules", language.label());
        let result = score(reference, &report.transcribed_text, language)
            .map_err(|_| SessionError::EmptyReference)?;

        if (result.accuracy - report.accuracy).abs() > ACCURACY_TOLERANCE {
            log::warn!(
                "session: backend reported accuracy {:.4} but local score is {:.4}; keeping local",
                report.accuracy,
                result.accuracy
            );
        }

        Ok(PracticeOutcome {
            transcript: report.transcribed_text.clone(),
            result,
            backend_report: report,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcribe::MockBackend;

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn make_report(text: &str, accuracy: f64) -> BackendReport {
        BackendReport {
            transcribed_text: text.into(),
            accuracy,
            incorrect_words: vec![],
            correct_words: None,
            total_words: None,
        }
    }

    fn make_session(backend: &Arc<MockBackend>, language: &str) -> PracticeSession {
        let backend: Arc<dyn TranscriptionBackend> = backend.clone();
        PracticeSession::new(backend, language)
    }

    fn clip() -> AudioPayload {
        AudioPayload::webm(vec![0u8; 16])
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    /// A blank reference must fail before any request is made.
    #[tokio::test]
    async fn blank_reference_is_rejected_before_upload() {
        let backend = Arc::new(MockBackend::ok(make_report("hello", 1.0)));
        let session = make_session(&backend, "english");

        let err = session.submit(&clip(), "   \t").await.unwrap_err();

        assert!(matches!(err, SessionError::EmptyReference));
        assert_eq!(backend.calls(), 0);
    }

    /// A perfect reproduction scores 1.0 with no incorrect words.
    #[tokio::test]
    async fn perfect_attempt_scores_one() {
        let backend = Arc::new(MockBackend::ok(make_report("the quick fox", 1.0)));
        let session = make_session(&backend, "english");

        let outcome = session.submit(&clip(), "The quick fox.").await.unwrap();

        assert_eq!(outcome.result.accuracy, 1.0);
        assert!(outcome.result.incorrect_words.is_empty());
        assert_eq!(outcome.transcript, "the quick fox");
    }

    /// The local score wins even when the backend's figure disagrees.
    #[tokio::test]
    async fn local_score_overrides_backend_figure() {
        // Backend claims a perfect score for a transcript that is not.
        let backend = Arc::new(MockBackend::ok(make_report("the slow fox", 1.0)));
        let session = make_session(&backend, "english");

        let outcome = session.submit(&clip(), "the quick fox").await.unwrap();

        assert!((outcome.result.accuracy - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(outcome.result.incorrect_words, vec!["quick"]);
        // The backend's own report stays available, untouched.
        assert_eq!(outcome.backend_report.accuracy, 1.0);
    }

    /// A backend failure surfaces after exactly one attempt — no retries.
    #[tokio::test]
    async fn backend_failure_propagates_without_retry() {
        let backend = Arc::new(MockBackend::err(TranscribeError::Timeout));
        let session = make_session(&backend, "english");

        let err = session.submit(&clip(), "the quick fox").await.unwrap_err();

        assert!(matches!(
            err,
            SessionError::Backend(TranscribeError::Timeout)
        ));
        assert_eq!(backend.calls(), 1);
    }

    /// The session's language selector drives local normalization.
    #[tokio::test]
    async fn language_selector_applies_to_scoring() {
        let backend = Arc::new(MockBackend::ok(make_report("chao bạn", 1.0)));
        let session = make_session(&backend, "vietnamese");

        let outcome = session.submit(&clip(), "chào bạn").await.unwrap();

        assert!((outcome.result.accuracy - 0.5).abs() < 1e-9);
        assert_eq!(outcome.result.incorrect_words, vec!["chào"]);
    }

    /// Unknown selectors degrade to baseline rules instead of failing.
    #[tokio::test]
    async fn unknown_language_still_scores() {
        let backend = Arc::new(MockBackend::ok(make_report("the cat", 1.0)));
        let session = make_session(&backend, "klingon");

        let outcome = session.submit(&clip(), "The Cat.").await.unwrap();

        assert_eq!(outcome.result.accuracy, 1.0);
    }
}
