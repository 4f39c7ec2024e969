//! Fallback pass
//!
//! Cruder, lower-precision strategies used only when an accumulator yields
//! nothing. Each line is judged on its own (plus, for agenda items, the
//! line that follows it).

use crate::classify::{find_date, find_time, normalize_time, strip_honorific};
use crate::speakers::new_profile;
use agendex_domain::{AgendaItemType, DraftAgendaItem, DraftSpeakerProfile, RawLine};

const TITLE_MIN_CHARS: usize = 5;
const NAME_MIN_CHARS: usize = 5;
const NAME_MAX_CHARS: usize = 100;
const NAME_WORDS: std::ops::RangeInclusive<usize> = 2..=5;

/// Every time line followed by a plausible title becomes a bare session
///
/// Dates are still tracked so items get the most recent date seen; before
/// any date line the caller's `current_date_fallback` is used.
pub fn fallback_agenda(lines: &[RawLine], current_date_fallback: &str) -> Vec<DraftAgendaItem> {
    let mut current_date: Option<String> = None;
    let mut items = Vec::new();

    for (position, line) in lines.iter().enumerate() {
        if let Some(date) = find_date(&line.text) {
            current_date = Some(date);
        }

        let Some(raw_time) = find_time(&line.text) else {
            continue;
        };
        let Some(next) = lines.get(position + 1) else {
            continue;
        };
        if next.char_len() <= TITLE_MIN_CHARS {
            continue;
        }

        let time = normalize_time(raw_time);
        items.push(DraftAgendaItem {
            title: next.text.clone(),
            date: current_date
                .clone()
                .unwrap_or_else(|| current_date_fallback.to_string()),
            start_time: time.clone(),
            end_time: time,
            item_type: AgendaItemType::Session,
            ..Default::default()
        });
    }

    items
}

/// Short capitalized lines become bare speaker profiles
pub fn fallback_speakers(
    lines: &[RawLine],
    default_specialty: &str,
    default_bio: &str,
) -> Vec<DraftSpeakerProfile> {
    lines
        .iter()
        .filter(|line| looks_like_name(line))
        .map(|line| strip_honorific(&line.text).trim())
        .filter(|name| name.chars().count() > NAME_MIN_CHARS)
        .map(|name| {
            let mut profile = new_profile(name, default_specialty);
            profile.bio = default_bio.to_string();
            profile
        })
        .collect()
}

fn looks_like_name(line: &RawLine) -> bool {
    let text = line.text.as_str();
    let words = text.split_whitespace().count();
    let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
    let numeric = text
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || c.is_ascii_punctuation());

    NAME_WORDS.contains(&words) && starts_upper && !numeric && line.char_len() < NAME_MAX_CHARS
}
