//! Position-by-position comparison of a transcript against a reference.
//!
//! # Algorithm
//!
//! Both texts are normalized into word sequences `R` (reference) and `T`
//! (transcript).  Each reference position `i` is compared against `T[i]`:
//! `R[i] == T[i]` is a match, anything else (including `T` being too short)
//! is a mismatch.  Words `T` has beyond `len(R)` are ignored; the speaker is
//! graded on the reference, not penalised for trailing noise.
//!
//! ```text
//! R:  the   quick   brown   fox
//! T:  the   quack   brown
//!      ✓      ✗       ✓      ✗     accuracy = 2/4
//! ```
//!
//! Accuracy is `matches / len(R)`.  Mismatched reference words are collected
//! in order, de-duplicated, so the speaker sees which words to practise.
//!
//! The comparison is pure and deterministic: equal inputs always produce a
//! bit-identical result.

use thiserror::Error;

use crate::score::normalize::normalize_words;
use crate::score::{ComparisonResult, Language};

// ---------------------------------------------------------------------------
// ScoreError
// ---------------------------------------------------------------------------

/// Errors from [`score`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The reference text was empty or whitespace-only.  There is nothing to
    /// grade against, so callers should reject the input before recording or
    /// uploading anything.
    #[error("reference text must not be empty")]
    EmptyReference,
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

/// Compare `transcribed` against `reference` and grade the reproduction.
///
/// Both texts are normalized with the same [`Language`] rules before the
/// positional comparison.  See the module docs for the algorithm.
///
/// # Errors
///
/// [`ScoreError::EmptyReference`] when `reference` is empty or whitespace.
/// A reference that normalizes to nothing (pure punctuation) is not an
/// error; it scores `0.0` with no incorrect words, since no word can be
/// graded.
///
/// # Examples
///
/// ```
/// use recite::score::{score, Language};
///
/// let result = score("The quick fox.", "the slow fox", Language::English).unwrap();
/// assert!((result.accuracy - 2.0 / 3.0).abs() < 1e-9);
/// assert_eq!(result.incorrect_words, vec!["quick"]);
/// ```
pub fn score(
    reference: &str,
    transcribed: &str,
    language: Language,
) -> Result<ComparisonResult, ScoreError> {
    if reference.trim().is_empty() {
        return Err(ScoreError::EmptyReference);
    }

    let reference_words = normalize_words(reference, language);
    let transcribed_words = normalize_words(transcribed, language);

    if reference_words.is_empty() {
        // Punctuation-only reference: nothing gradeable survives.
        return Ok(ComparisonResult {
            accuracy: 0.0,
            incorrect_words: Vec::new(),
            correct_words: 0,
            total_words: 0,
        });
    }

    let mut correct_words = 0usize;
    let mut incorrect_words: Vec<String> = Vec::new();

    for (i, word) in reference_words.iter().enumerate() {
        if transcribed_words.get(i) == Some(word) {
            correct_words += 1;
        } else if !incorrect_words.contains(word) {
            incorrect_words.push(word.clone());
        }
    }

    Ok(ComparisonResult {
        accuracy: correct_words as f64 / reference_words.len() as f64,
        incorrect_words,
        correct_words,
        total_words: reference_words.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
