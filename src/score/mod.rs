//! Scoring core: grade how faithfully a transcript reproduces a reference
//! sentence.
//!
//! This is the heart of the crate and is deliberately free of I/O.  Feed it
//! the sentence the speaker was asked to read and whatever a transcription
//! engine heard, and it answers two questions: *how much matched* (an
//! accuracy in `[0, 1]`) and *which words to practise* (the mismatched
//! reference words).
//!
//! | Module      | Responsibility                                        |
//! |-------------|-------------------------------------------------------|
//! | `language`  | Language selection and lenient selector parsing       |
//! | `normalize` | Lowercase / punctuation / whitespace normalization    |
//! | `scorer`    | Positional word alignment and accuracy computation    |
//! | `result`    | [`ComparisonResult`] and display helpers              |
//!
//! # Quick start
//!
//! ```
//! use recite::score::{score, Language};
//!
//! let result = score("The quick brown fox.", "the quick brown", Language::English).unwrap();
//! assert_eq!(result.accuracy_percent(), "75.00%");
//! assert_eq!(result.incorrect_words, vec!["fox"]);
//! ```

pub mod language;
pub mod normalize;
pub mod result;
pub mod scorer;

pub use language::Language;
pub use normalize::normalize_words;
pub use result::ComparisonResult;
pub use scorer::{score, ScoreError};
