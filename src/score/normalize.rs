//! Locale-aware text normalization.
//!
//! Reference sentences and transcripts go through the same pipeline before
//! they are compared, so that formatting noise never counts against the
//! speaker:
//!
//! 1. Unicode lowercase.
//! 2. Punctuation removal.  Characters that are neither alphanumeric nor
//!    whitespace are deleted in place, not replaced by a space:
//!    `"well-known"` becomes the single word `wellknown`.
//! 3. Split on whitespace.  Runs of spaces, tabs and newlines collapse and
//!    never produce empty words.
//!
//! On top of the baseline, [`Language::English`] folds accented Latin letters
//! to their ASCII base so loanwords in a reference (`café`, `naïve`) match
//! the plain-ASCII output of English transcription models.
//! [`Language::Vietnamese`] keeps diacritics untouched because they are
//! phonemic.

use crate::score::Language;

// ---------------------------------------------------------------------------
// normalize_words
// ---------------------------------------------------------------------------

/// Normalize `text` into its comparable word sequence.
///
/// Returns an empty vector when nothing survives normalization (empty input,
/// whitespace-only input, or punctuation-only input).
///
/// # Examples
///
/// ```
/// use recite::score::{normalize_words, Language};
///
/// let words = normalize_words("  The quick, brown fox!  ", Language::English);
/// assert_eq!(words, vec!["the", "quick", "brown", "fox"]);
///
/// assert_eq!(normalize_words("well-known", Language::English), vec!["wellknown"]);
/// assert!(normalize_words("?! ...", Language::English).is_empty());
/// ```
pub fn normalize_words(text: &str, language: Language) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|token| {
            let word = normalize_token(token, language);
            if word.is_empty() {
                None
            } else {
                Some(word)
            }
        })
        .collect()
}

/// Lowercase one whitespace-delimited token and strip punctuation.
///
/// Tokens that are pure punctuation (`"--"`, `"?!"`) normalize to an empty
/// string and are dropped by [`normalize_words`].
fn normalize_token(token: &str, language: Language) -> String {
    let mut word = String::with_capacity(token.len());
    for c in token.chars() {
        // char-level lowercase can expand to several chars (e.g. 'İ').
        for lower in c.to_lowercase() {
            let folded = match language {
                Language::English => fold_latin_accent(lower),
                Language::Vietnamese | Language::Other => lower,
            };
            if folded.is_alphanumeric() {
                word.push(folded);
            }
        }
    }
    word
}

// ---------------------------------------------------------------------------
// Accent folding
// ---------------------------------------------------------------------------

/// Map an accented Latin letter to its ASCII base letter.
///
/// Covers the Latin-1 Supplement and Latin Extended-A letters that appear in
/// English loanwords.  Runs after lowercasing, so only lowercase forms are
/// listed.  Everything else passes through unchanged.
fn fold_latin_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ð' | 'đ' | 'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ś' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- baseline rules ---

    #[test]
    fn lowercases_and_strips_punctuation() {
        let words = normalize_words("The Cat.", Language::Other);
        assert_eq!(words, vec!["the", "cat"]);
    }

    #[test]
    fn punctuation_is_deleted_not_replaced() {
        assert_eq!(
            normalize_words("well-known", Language::Other),
            vec!["wellknown"]
        );
        assert_eq!(normalize_words("don't", Language::Other), vec!["dont"]);
    }

    #[test]
    fn digits_survive() {
        let words = normalize_words("room 101", Language::Other);
        assert_eq!(words, vec!["room", "101"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let words = normalize_words("  the \t quick \n\n fox  ", Language::Other);
        assert_eq!(words, vec!["the", "quick", "fox"]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_words() {
        assert!(normalize_words("", Language::Other).is_empty());
        assert!(normalize_words("   \t\n ", Language::Other).is_empty());
    }

    #[test]
    fn punctuation_only_tokens_vanish() {
        assert!(normalize_words("?! ... ---", Language::Other).is_empty());
        assert_eq!(
            normalize_words("yes -- no", Language::Other),
            vec!["yes", "no"]
        );
    }

    // --- per-language rules ---

    #[test]
    fn english_folds_accents_to_ascii() {
        assert_eq!(
            normalize_words("Café naïve résumé", Language::English),
            vec!["cafe", "naive", "resume"]
        );
    }

    #[test]
    fn vietnamese_preserves_diacritics() {
        assert_eq!(
            normalize_words("Chào bạn!", Language::Vietnamese),
            vec!["chào", "bạn"]
        );
    }

    #[test]
    fn other_language_keeps_accents_but_applies_baseline() {
        assert_eq!(
            normalize_words("Déjà, Vu.", Language::Other),
            vec!["déjà", "vu"]
        );
    }

    #[test]
    fn unicode_lowercase_applies_to_accented_capitals() {
        assert_eq!(
            normalize_words("CHÀO", Language::Vietnamese),
            vec!["chào"]
        );
        assert_eq!(normalize_words("CAFÉ", Language::English), vec!["cafe"]);
    }
}
