//! Speaker name resolution against a caller-supplied catalog

use crate::classify::{is_honorific, FoldedText};
use agendex_domain::KnownSpeaker;

/// Characters trimmed from the end of a title once the speaker name is cut off
const TITLE_SEPARATORS: &[char] = &['-', '–', '—', '|', ',', ':', ';', '/'];

/// Catalog entries found in a line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerMatch {
    /// Identifiers of every matching entry, in catalog order
    pub speaker_ids: Vec<String>,

    /// Byte offset in the line where the first matching entry's name begins
    pub first_offset: Option<usize>,
}

impl SpeakerMatch {
    /// Whether any catalog entry matched
    pub fn is_empty(&self) -> bool {
        self.speaker_ids.is_empty()
    }
}

/// Finds known speaker names inside free text
///
/// Matching is a case-insensitive substring test. The catalog is walked in
/// the order given, so when one name contains another the earlier entry is
/// the "first" match.
#[derive(Debug, Clone, Copy)]
pub struct SpeakerResolver<'a> {
    catalog: &'a [KnownSpeaker],
}

impl<'a> SpeakerResolver<'a> {
    /// Create a resolver over an ordered catalog
    pub fn new(catalog: &'a [KnownSpeaker]) -> Self {
        Self { catalog }
    }

    /// Catalog entries whose name appears in `line`
    ///
    /// Entries with a blank name are ignored.
    pub fn resolve(&self, line: &str) -> SpeakerMatch {
        let folded = FoldedText::new(line);
        let mut result = SpeakerMatch::default();

        for speaker in self.catalog {
            if speaker.name.trim().is_empty() {
                continue;
            }
            if let Some((start, _)) = folded.find(speaker.name.trim()) {
                result.first_offset.get_or_insert(start);
                result.speaker_ids.push(speaker.id.clone());
            }
        }

        result
    }

    /// Split a line into a title and the ids of the speakers it names
    ///
    /// The title is the text before the first matched name, minus any
    /// trailing honorific or separator. Without a match, or when nothing
    /// precedes the name, the whole line is the title.
    pub fn split_title(&self, line: &str) -> (String, Vec<String>) {
        let matched = self.resolve(line);
        let title = matched
            .first_offset
            .map(|offset| title_before(line, offset))
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| line.trim().to_string());
        (title, matched.speaker_ids)
    }
}

fn title_before(line: &str, offset: usize) -> String {
    let mut head = &line[..offset];
    loop {
        let trimmed =
            head.trim_end_matches(|c: char| c.is_whitespace() || TITLE_SEPARATORS.contains(&c));
        let stripped = strip_trailing_honorific(trimmed);
        if stripped.len() == head.len() {
            break;
        }
        head = stripped;
    }
    head.to_string()
}

fn strip_trailing_honorific(text: &str) -> &str {
    let word_start = text
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    if is_honorific(&text[word_start..]) {
        &text[..word_start]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<KnownSpeaker> {
        vec![
            KnownSpeaker::new("s1", "Juan Pérez"),
            KnownSpeaker::new("s2", "Ana Gómez"),
        ]
    }

    #[test]
    fn test_title_and_speaker_split() {
        let catalog = catalog();
        let resolver = SpeakerResolver::new(&catalog);
        let (title, ids) = resolver.split_title("Manejo de riesgo cardiovascular Dr. Juan Pérez");
        assert_eq!(title, "Manejo de riesgo cardiovascular");
        assert_eq!(ids, vec!["s1".to_string()]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let catalog = catalog();
        let resolver = SpeakerResolver::new(&catalog);
        let matched = resolver.resolve("Panel con JUAN PÉREZ y ana gómez");
        assert_eq!(matched.speaker_ids, vec!["s1".to_string(), "s2".to_string()]);
        assert_eq!(matched.first_offset, Some("Panel con ".len()));
    }

    #[test]
    fn test_separator_and_honorific_trimmed() {
        let catalog = catalog();
        let resolver = SpeakerResolver::new(&catalog);
        let (title, _) = resolver.split_title("Insuficiencia cardiaca - Dra. Ana Gómez");
        assert_eq!(title, "Insuficiencia cardiaca");
    }

    #[test]
    fn test_no_match_keeps_whole_line() {
        let catalog = catalog();
        let resolver = SpeakerResolver::new(&catalog);
        let (title, ids) = resolver.split_title("Simposio de hipertensión");
        assert_eq!(title, "Simposio de hipertensión");
        assert!(ids.is_empty());
    }

    #[test]
    fn test_name_at_start_falls_back_to_line() {
        let catalog = catalog();
        let resolver = SpeakerResolver::new(&catalog);
        let (title, ids) = resolver.split_title("Dr. Juan Pérez");
        assert_eq!(title, "Dr. Juan Pérez");
        assert_eq!(ids, vec!["s1".to_string()]);
    }

    #[test]
    fn test_catalog_order_decides_overlap() {
        let catalog = vec![
            KnownSpeaker::new("long", "María José Ruiz"),
            KnownSpeaker::new("short", "José Ruiz"),
        ];
        let resolver = SpeakerResolver::new(&catalog);
        let matched = resolver.resolve("Cierre Dra. María José Ruiz");
        assert_eq!(matched.speaker_ids, vec!["long".to_string(), "short".to_string()]);
        assert_eq!(matched.first_offset, Some("Cierre Dra. ".len()));

        let reversed: Vec<KnownSpeaker> = catalog.into_iter().rev().collect();
        let resolver = SpeakerResolver::new(&reversed);
        let matched = resolver.resolve("Cierre Dra. María José Ruiz");
        assert_eq!(matched.speaker_ids, vec!["short".to_string(), "long".to_string()]);
        assert_eq!(matched.first_offset, Some("Cierre Dra. María ".len()));
    }

    #[test]
    fn test_blank_catalog_names_ignored() {
        let catalog = vec![KnownSpeaker::new("ghost", "  ")];
        let resolver = SpeakerResolver::new(&catalog);
        assert!(resolver.resolve("Cualquier texto").is_empty());
    }
}
