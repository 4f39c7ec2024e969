//! Line module - the unit every classifier and accumulator operates on

/// One trimmed, non-empty line of source text
///
/// `index` is the position among the *retained* lines (re-indexed from 0
/// after empty lines are discarded). Lines are always processed in index
/// order and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Trimmed line content, never empty
    pub text: String,

    /// Position among retained lines
    pub index: usize,
}

impl RawLine {
    /// Create a new line
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
