//! Practice session orchestration.
//!
//! Connects the two halves of the crate: recorded audio goes out to the
//! [`transcribe`](crate::transcribe) backend, the transcript that comes back
//! is graded by the [`score`](crate::score) core, and the caller receives a
//! single [`PracticeOutcome`].

pub mod runner;

pub use runner::{PracticeOutcome, PracticeSession, SessionError};
