//! Comparison output types.

// ---------------------------------------------------------------------------
// ComparisonResult
// ---------------------------------------------------------------------------

/// Outcome of comparing a transcript against a reference sentence.
///
/// Produced by [`score`](crate::score::score).  `PartialEq` compares the
/// accuracy bit-for-bit, which is what the scorer's determinism guarantee
/// calls for.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// Fraction of reference words reproduced at their position, in
    /// `[0.0, 1.0]`.
    pub accuracy: f64,
    /// Reference words (normalized form) that were not reproduced,
    /// de-duplicated in first-occurrence order.
    pub incorrect_words: Vec<String>,
    /// Number of reference positions that matched.
    pub correct_words: usize,
    /// Number of words in the normalized reference.
    pub total_words: usize,
}

impl ComparisonResult {
    /// Accuracy rendered as a two-decimal percentage, e.g. `"66.67%"`.
    pub fn accuracy_percent(&self) -> String {
        format!("{:.2}%", self.accuracy * 100.0)
    }

    /// Incorrect words joined with `", "` for display.
    pub fn incorrect_words_joined(&self) -> String {
        self.incorrect_words.join(", ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn result(accuracy: f64, incorrect: &[&str]) -> ComparisonResult {
        ComparisonResult {
            accuracy,
            incorrect_words: incorrect.iter().map(|w| w.to_string()).collect(),
            correct_words: 0,
            total_words: 0,
        }
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(result(2.0 / 3.0, &[]).accuracy_percent(), "66.67%");
        assert_eq!(result(1.0, &[]).accuracy_percent(), "100.00%");
        assert_eq!(result(0.0, &[]).accuracy_percent(), "0.00%");
        assert_eq!(result(0.5, &[]).accuracy_percent(), "50.00%");
    }

    #[test]
    fn joined_list_is_comma_separated() {
        assert_eq!(
            result(0.0, &["quick", "fox"]).incorrect_words_joined(),
            "quick, fox"
        );
        assert_eq!(result(1.0, &[]).incorrect_words_joined(), "");
    }
}
