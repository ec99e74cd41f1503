//! recite — pronunciation-practice scoring.
//!
//! A speaker reads a reference sentence aloud; a transcription backend turns
//! the recording into text; this crate grades how faithfully the transcript
//! reproduces the reference and reports which words need practice.
//!
//! # Architecture
//!
//! ```text
//! audio clip ──▶ transcribe::HttpBackend ──▶ backend (/upload, multipart)
//!                       │
//!                       ▼ transcript
//! reference ──▶ score::score ──▶ ComparisonResult { accuracy, incorrect_words }
//!                       ▲
//!          session::PracticeSession (drives both, local score authoritative)
//! ```
//!
//! The scoring core is pure and usable on its own; the backend client and
//! session layer only matter when grading live recordings.
//!
//! # Quick start
//!
//! ```
//! use recite::{score, Language};
//!
//! let result = score("The quick brown fox.", "the quick brown", Language::English).unwrap();
//! assert_eq!(result.accuracy_percent(), "75.00%");
//! assert_eq!(result.incorrect_words, vec!["fox"]);
//! ```

pub mod config;
pub mod score;
pub mod session;
pub mod transcribe;

pub use score::{score, ComparisonResult, Language, ScoreError};
