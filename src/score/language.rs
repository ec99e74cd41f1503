//! Practice-language selection.
//!
//! The language decides which normalization rules apply before two texts are
//! compared.  Parsing is deliberately infallible: a language selector is user
//! input (config value, CLI flag, form field), and an unrecognised value must
//! degrade to the baseline rules rather than abort a submission.

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Languages with dedicated normalization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English.  Latin diacritics fold to their ASCII base letters so a
    /// reference like `"café"` matches the `"cafe"` most English
    /// transcription models emit.
    English,
    /// Vietnamese.  Diacritics are phonemic (`chào` and `chao` are different
    /// words) and are preserved verbatim.
    Vietnamese,
    /// Any unrecognised language.  Baseline rules only: Unicode lowercase,
    /// punctuation removal, whitespace split.
    Other,
}

impl Language {
    /// Parse a language selector string.
    ///
    /// Accepts full names and ISO 639-1 codes, case-insensitively and with
    /// surrounding whitespace ignored.  Anything unrecognised maps to
    /// [`Language::Other`]; this function never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use recite::score::Language;
    ///
    /// assert_eq!(Language::parse("english"),    Language::English);
    /// assert_eq!(Language::parse("EN"),         Language::English);
    /// assert_eq!(Language::parse("vietnamese"), Language::Vietnamese);
    /// assert_eq!(Language::parse("klingon"),    Language::Other);
    /// ```
    pub fn parse(value: &str) -> Language {
        match value.trim().to_lowercase().as_str() {
            "english" | "en" => Language::English,
            "vietnamese" | "vi" => Language::Vietnamese,
            _ => Language::Other,
        }
    }

    /// Canonical lowercase name, for logs and display.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Vietnamese => "vietnamese",
            Language::Other => "default",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
