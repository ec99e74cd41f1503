//! Request and response types for the transcription backend.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AudioPayload
// ---------------------------------------------------------------------------

/// A recorded clip, ready for upload.
///
/// The bytes are an opaque container blob (webm, wav, ...); this crate never
/// decodes audio.  The file name travels with the upload because backends
/// commonly sniff the container format from its extension.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
        }
    }

    /// Payload named the way browser recorders name their blobs.
    pub fn webm(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "audio.webm")
    }
}

// ---------------------------------------------------------------------------
// BackendReport
// ---------------------------------------------------------------------------

/// JSON body returned by the backend's upload endpoint.
///
/// `transcribed_text` is the field this crate actually consumes; the
/// accuracy figures are the backend's own grading and are kept only for
/// comparison against the local score.  The word counts are optional because
/// not every backend reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendReport {
    /// What the backend heard in the audio.
    pub transcribed_text: String,
    /// The backend's accuracy figure, in `[0.0, 1.0]`.
    pub accuracy: f64,
    /// The backend's list of mispronounced words.
    pub incorrect_words: Vec<String>,
    /// Matched-word count, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_words: Option<usize>,
    /// Reference word count, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
