//! Line segmentation

use agendex_domain::RawLine;

/// Split raw text into trimmed, non-empty lines
///
/// Order is preserved and retained lines are re-indexed from 0. Never fails;
/// blank input yields an empty sequence.
pub fn segment_lines(raw_text: &str) -> Vec<RawLine> {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, text)| RawLine::new(text, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped_and_reindexed() {
        let lines = segment_lines("  first \n\n   \r\nsecond\r\n\tthird");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment_lines("").is_empty());
        assert!(segment_lines("\n \n\t\n").is_empty());
    }
}
