//! Token classifiers
//!
//! Pure detect-and-normalize functions over a single line of text. None of
//! them requires the whole line to be the token: a line can carry a date, a
//! time and free text at once.

use agendex_domain::AgendaItemType;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `YYYY-MM-DD`, `YYYY/MM/DD`, `DD-MM-YYYY`, `DD/MM/YYYY` and two-digit-year variants.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{4}[/-]\d{1,2}[/-]\d{1,2}|\d{1,2}[/-]\d{1,2}[/-](?:\d{4}|\d{2}))\b")
        .expect("valid date regex")
});

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("valid time regex"));

/// Leading `Dr.`, `Dra`, `Doctor`, `Doctora ` etc. A bare prefix must be
/// followed by a period or whitespace so names like "Drake" survive.
static HONORIFIC_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:doctora|doctor|dra|dr)(?:\.\s*|\s+)").expect("valid honorific regex")
});

const HONORIFICS: [&str; 4] = ["dr", "dra", "doctor", "doctora"];

/// Keyword sets tested in this order. When several sets match a line the
/// *last* one wins, so "breakfast" (break, then meal) is a meal.
pub const CATEGORY_KEYWORDS: &[(AgendaItemType, &[&str])] = &[
    (
        AgendaItemType::Break,
        &["coffee", "café", "cafe", "break", "receso", "descanso"],
    ),
    (
        AgendaItemType::Meal,
        &["almuerzo", "lunch", "comida", "desayuno", "breakfast", "dinner"],
    ),
    (
        AgendaItemType::Welcome,
        &["bienvenida", "welcome", "inauguración", "apertura"],
    ),
    (AgendaItemType::Closing, &["clausura", "cierre", "closing"]),
    (AgendaItemType::Workshop, &["taller", "workshop"]),
    (AgendaItemType::Qna, &["preguntas", "q&a", "questions"]),
];

/// Find the first date in a line, normalized to `YYYY-MM-DD`
///
/// Matches that do not form a real calendar date are skipped.
pub fn find_date(line: &str) -> Option<String> {
    DATE_RE
        .find_iter(line)
        .find_map(|m| normalize_date(m.as_str()))
}

/// Normalize a raw date token to `YYYY-MM-DD`
///
/// A four-digit first group means year-first; anything else is day-first.
/// Two-digit years expand to `20YY`.
///
/// ```
/// use agendex_extractor::classify::normalize_date;
///
/// assert_eq!(normalize_date("14/11/25").as_deref(), Some("2025-11-14"));
/// assert_eq!(normalize_date("2025/11/14").as_deref(), Some("2025-11-14"));
/// ```
pub fn normalize_date(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.trim().split(['/', '-']).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };

    let (year, month, day) = if first.len() == 4 {
        (*first, *second, *third)
    } else {
        (*third, *second, *first)
    };

    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };

    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Find the first `H:MM` / `HH:MM` token in a line, unpadded
pub fn find_time(line: &str) -> Option<&str> {
    TIME_RE.find(line).map(|m| m.as_str())
}

/// Every time token in a line, in order of appearance
pub fn find_times(line: &str) -> Vec<&str> {
    TIME_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// Zero-pad a time token to `HH:MM`. Idempotent.
pub fn normalize_time(raw: &str) -> String {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some((hours, minutes)) => format!("{:0>2}:{}", hours, minutes),
        None => raw.to_string(),
    }
}

/// Structural heading test: plausible length and no lowercase letters
///
/// Acronym-only or digit-heavy lines also qualify; the heuristic looks at
/// case alone.
pub fn is_section_header(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    len > 5 && len < 100 && line == line.to_uppercase()
}

/// Category of a line, if any keyword set matches (last matching set wins)
pub fn classify_category(line: &str) -> Option<AgendaItemType> {
    let lowered = line.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(kind, _)| *kind)
        .last()
}

/// Whether a single word is an honorific (`Dr`, `Dra.`, `Doctora`...)
pub fn is_honorific(word: &str) -> bool {
    let word = word.trim().trim_end_matches('.').to_lowercase();
    HONORIFICS.contains(&word.as_str())
}

/// Remove a leading honorific, if present
pub fn strip_honorific(line: &str) -> &str {
    match HONORIFIC_PREFIX_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Value of a `Label: value` line when the label is one of `labels`
///
/// Labels are compared case-insensitively; an empty value yields `None`.
pub fn labeled_value(line: &str, labels: &[&str]) -> Option<String> {
    let (label, value) = line.split_once(':')?;
    let label = label.trim().to_lowercase();
    let value = value.trim();
    if value.is_empty() || !labels.contains(&label.as_str()) {
        return None;
    }
    Some(value.to_string())
}

/// Text following the first occurrence of any marker word
///
/// Leading `:`, `-` and whitespace are dropped from the result.
pub fn text_after_marker(line: &str, markers: &[&str]) -> Option<String> {
    let folded = FoldedText::new(line);
    markers.iter().find_map(|marker| {
        let end = folded.find(marker)?.1;
        let rest =
            line[end..].trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace());
        Some(rest.trim_end().to_string())
    })
}

/// Lower-cased copy of a line that remembers where each byte came from
///
/// Lower-casing can change byte lengths, so offsets found in the folded text
/// are mapped back through `origin` before slicing the original.
pub(crate) struct FoldedText<'a> {
    source: &'a str,
    folded: String,
    origin: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());
        for (offset, ch) in source.char_indices() {
            for lower in ch.to_lowercase() {
                let before = folded.len();
                folded.push(lower);
                origin.extend(std::iter::repeat_n(offset, folded.len() - before));
            }
        }
        Self {
            source,
            folded,
            origin,
        }
    }

    /// Fold a needle the same way the haystack was folded
    pub(crate) fn fold(needle: &str) -> String {
        needle.chars().flat_map(char::to_lowercase).collect()
    }

    /// Case-insensitive search; returns `(start, end)` byte offsets into the source
    pub(crate) fn find(&self, needle: &str) -> Option<(usize, usize)> {
        let needle = Self::fold(needle);
        if needle.is_empty() {
            return None;
        }
        let start = self.folded.find(&needle)?;
        let end = start + needle.len();
        let source_end = self.origin.get(end).copied().unwrap_or(self.source.len());
        Some((self.origin[start], source_end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_date_formats_agree() {
        for raw in ["14/11/2025", "14-11-2025", "2025-11-14", "2025/11/14"] {
            assert_eq!(normalize_date(raw).as_deref(), Some("2025-11-14"), "{}", raw);
        }
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(normalize_date("14/11/25").as_deref(), Some("2025-11-14"));
    }

    #[test]
    fn test_ambiguous_date_is_day_first() {
        assert_eq!(normalize_date("01/02/03").as_deref(), Some("2003-02-01"));
    }

    #[test]
    fn test_impossible_date_rejected() {
        assert_eq!(normalize_date("31/02/2025"), None);
        assert_eq!(find_date("Sala 45/13/2025"), None);
    }

    #[test]
    fn test_find_date_inside_text() {
        assert_eq!(
            find_date("Viernes 14/11/2025 - Día 1").as_deref(),
            Some("2025-11-14")
        );
        assert_eq!(find_date("Sin fecha"), None);
    }

    #[test]
    fn test_time_padding() {
        assert_eq!(normalize_time("8:00"), "08:00");
        assert_eq!(normalize_time("08:00"), "08:00");
    }

    #[test]
    fn test_find_time_returns_raw_token() {
        assert_eq!(find_time("Inicio 8:30h Auditorio"), Some("8:30"));
        assert_eq!(find_times("08:00 - 08:30 Registro"), vec!["08:00", "08:30"]);
        assert_eq!(find_time("Registro"), None);
    }

    #[test]
    fn test_section_header_bounds() {
        assert!(is_section_header("SIMPOSIO DE CARDIOLOGÍA"));
        assert!(is_section_header("OMS-FIC"));
        assert!(!is_section_header("SALA1"));
        assert!(!is_section_header("Simposio de Cardiología"));
        assert!(!is_section_header(&"A".repeat(100)));
    }

    #[test]
    fn test_category_last_match_wins() {
        assert_eq!(classify_category("Coffee break"), Some(AgendaItemType::Break));
        assert_eq!(classify_category("Breakfast"), Some(AgendaItemType::Meal));
        assert_eq!(
            classify_category("Almuerzo y taller práctico"),
            Some(AgendaItemType::Workshop)
        );
        assert_eq!(classify_category("Bienvenida"), Some(AgendaItemType::Welcome));
        assert_eq!(classify_category("Manejo de la hipertensión"), None);
    }

    #[test]
    fn test_honorifics() {
        assert_eq!(strip_honorific("Dra. Ana Gómez"), "Ana Gómez");
        assert_eq!(strip_honorific("doctor Luis Ruiz"), "Luis Ruiz");
        assert_eq!(strip_honorific("Drake Ramírez"), "Drake Ramírez");
        assert!(is_honorific("Dr."));
        assert!(is_honorific("DOCTORA"));
        assert!(!is_honorific("Draft"));
    }

    #[test]
    fn test_labeled_value() {
        let labels = ["moderador", "moderadora"];
        assert_eq!(
            labeled_value("Moderadora: Dra. Ana Gómez", &labels).as_deref(),
            Some("Dra. Ana Gómez")
        );
        assert_eq!(labeled_value("Moderador:", &labels), None);
        assert_eq!(labeled_value("Sala: 3", &labels), None);
    }

    #[test]
    fn test_text_after_marker() {
        assert_eq!(
            text_after_marker("Especialidad: Endocrinología", &["especialidad"]).as_deref(),
            Some("Endocrinología")
        );
        assert_eq!(text_after_marker("Sin marcador", &["especialidad"]), None);
    }

    #[test]
    fn test_folded_find_maps_offsets() {
        let folded = FoldedText::new("ÁREA Juan PÉREZ");
        let (start, end) = folded.find("juan pérez").unwrap();
        assert_eq!(&"ÁREA Juan PÉREZ"[start..end], "Juan PÉREZ");
    }

    proptest! {
        #[test]
        fn prop_time_normalization_idempotent(h in 0u32..24, m in 0u32..60) {
            let once = normalize_time(&format!("{}:{:02}", h, m));
            prop_assert_eq!(normalize_time(&once), once.clone());
            prop_assert_eq!(once.len(), 5);
        }

        #[test]
        fn prop_date_separators_agree(y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let expected = format!("{:04}-{:02}-{:02}", y, m, d);
            let day_first = normalize_date(&format!("{}/{}/{}", d, m, y));
            let year_first = normalize_date(&format!("{}-{:02}-{:02}", y, m, d));
            prop_assert_eq!(day_first.as_deref(), Some(expected.as_str()));
            prop_assert_eq!(year_first.as_deref(), Some(expected.as_str()));
            prop_assert_eq!(normalize_date(&expected), Some(expected.clone()));
        }
    }
}
