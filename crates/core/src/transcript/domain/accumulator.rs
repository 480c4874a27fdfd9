/// The two transcript buffers and the rules for merging result events.
///
/// `finalized` only ever grows (a clear resets both buffers at once);
/// `interim` holds the most recent not-yet-final segment and is replaced
/// wholesale on every result, never concatenated across updates. Callers
/// must apply results in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptAccumulator {
    finalized: String,
    interim: String,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one result event: append the finalized delta (with a single
    /// separating space) and replace the interim segment.
    ///
    /// The separator is added only when the delta does not already end with
    /// a space; beyond that no normalization happens across result
    /// boundaries — repeated spaces or bare punctuation inside deltas are
    /// kept as delivered.
    pub fn push_result(&mut self, final_delta: &str, interim: &str) {
        if !final_delta.is_empty() {
            self.finalized.push_str(final_delta);
            if !final_delta.ends_with(' ') {
                self.finalized.push(' ');
            }
        }
        self.interim.clear();
        self.interim.push_str(interim);
    }

    /// Reset both buffers simultaneously.
    pub fn clear(&mut self) {
        self.finalized.clear();
        self.interim.clear();
    }

    /// Drop only the in-progress segment (listening stopped or restarted).
    pub fn clear_interim(&mut self) {
        self.interim.clear();
    }

    pub fn finalized(&self) -> &str {
        &self.finalized
    }

    pub fn interim(&self) -> &str {
        &self.interim
    }

    /// Finalized and interim text concatenated, for display and copy.
    pub fn snapshot(&self) -> String {
        let mut text = String::with_capacity(self.finalized.len() + self.interim.len());
        text.push_str(&self.finalized);
        text.push_str(&self.interim);
        text
    }

    /// True when there is nothing worth copying.
    pub fn is_blank(&self) -> bool {
        self.finalized.trim().is_empty() && self.interim.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn finalized_accumulates_in_order() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("hello ", "");
        acc.push_result("", "wor");
        acc.push_result("world", "");
        assert_eq!(acc.finalized(), "hello world ");
        assert_eq!(acc.interim(), "");
    }

    #[rstest]
    #[case("hello ", "hello ")]
    #[case("hello", "hello ")]
    fn exactly_one_separator_is_appended(#[case] delta: &str, #[case] expected: &str) {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result(delta, "");
        assert_eq!(acc.finalized(), expected);
    }

    #[test]
    fn interim_is_replaced_never_concatenated() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("", "he");
        acc.push_result("", "hello th");
        assert_eq!(acc.interim(), "hello th");
        acc.push_result("", "");
        assert_eq!(acc.interim(), "");
    }

    #[test]
    fn empty_delta_leaves_finalized_untouched() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("keep ", "");
        acc.push_result("", "interim");
        assert_eq!(acc.finalized(), "keep ");
    }

    #[test]
    fn finalized_length_is_monotonic_until_clear() {
        let mut acc = TranscriptAccumulator::new();
        let mut last_len = 0;
        for (delta, interim) in [("a", "x"), ("", "y"), ("b b", ""), ("", ""), ("c ", "z")] {
            acc.push_result(delta, interim);
            assert!(acc.finalized().len() >= last_len);
            last_len = acc.finalized().len();
        }
    }

    #[test]
    fn snapshot_ends_with_interim() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("first ", "second");
        assert_eq!(acc.snapshot(), "first second");
        assert!(acc.snapshot().ends_with("second"));
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("text", "more");
        acc.clear();
        assert_eq!(acc.finalized(), "");
        assert_eq!(acc.interim(), "");
        assert!(acc.is_blank());
    }

    #[test]
    fn clear_interim_preserves_finalized() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("kept ", "dropped");
        acc.clear_interim();
        assert_eq!(acc.finalized(), "kept ");
        assert_eq!(acc.interim(), "");
    }

    #[rstest]
    #[case("", "", true)]
    #[case("   ", "", true)]
    #[case("", "  \t", true)]
    #[case("word ", "", false)]
    #[case("", "w", false)]
    fn blank_means_whitespace_only(
        #[case] finalized: &str,
        #[case] interim: &str,
        #[case] blank: bool,
    ) {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result(finalized, interim);
        assert_eq!(acc.is_blank(), blank);
    }

    #[test]
    fn no_normalization_inside_deltas() {
        let mut acc = TranscriptAccumulator::new();
        acc.push_result("a  b", "");
        acc.push_result(",", "");
        assert_eq!(acc.finalized(), "a  b , ");
    }
}
