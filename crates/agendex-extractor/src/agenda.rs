//! Agenda accumulator
//!
//! Walks classified lines in source order and reduces them to agenda items.
//! A time line (once a date has been seen) opens a draft; the lines after it
//! fill title, description, moderator and location until the next time line
//! or the end of input seals it.

use crate::classify::{
    classify_category, find_date, find_times, is_section_header, labeled_value, normalize_time,
};
use crate::resolver::SpeakerResolver;
use crate::state::AccumulatorState;
use agendex_domain::{AgendaItemType, DraftAgendaItem, KnownSpeaker, RawLine};
use tracing::debug;

const MODERATOR_LABELS: &[&str] = &["moderador", "moderadora", "moderación", "moderator"];
const LOCATION_LABELS: &[&str] = &["lugar", "sala", "salón", "location", "room", "venue"];

/// A line must be longer than this to become a title
const TITLE_MIN_CHARS: usize = 5;

/// A line must be longer than this to be appended to a description
const DESCRIPTION_MIN_CHARS: usize = 10;

/// Agenda item under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAgendaDraft {
    item: DraftAgendaItem,
    /// Set right after opening; the next line may supply the end time
    awaiting_end_time: bool,
}

impl OpenAgendaDraft {
    /// The item as filled so far
    pub fn item(&self) -> &DraftAgendaItem {
        &self.item
    }
}

/// Reducer from program lines to agenda items
///
/// `current_date` and `current_section` persist across drafts; they are
/// copied into each draft when it opens and never applied retroactively.
#[derive(Debug, Clone)]
pub struct AgendaAccumulator<'a> {
    state: AccumulatorState<OpenAgendaDraft>,
    current_date: Option<String>,
    current_section: Option<String>,
    resolver: SpeakerResolver<'a>,
}

impl<'a> AgendaAccumulator<'a> {
    /// Create an idle accumulator that tags speakers from `catalog`
    pub fn new(catalog: &'a [KnownSpeaker]) -> Self {
        Self {
            state: AccumulatorState::Idle,
            current_date: None,
            current_section: None,
            resolver: SpeakerResolver::new(catalog),
        }
    }

    /// Most recent date seen (`YYYY-MM-DD`)
    pub fn current_date(&self) -> Option<&str> {
        self.current_date.as_deref()
    }

    /// Most recent section heading seen
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// The current state
    pub fn state(&self) -> &AccumulatorState<OpenAgendaDraft> {
        &self.state
    }

    /// Feed one line; returns the next accumulator and the item sealed by this line, if any
    pub fn step(mut self, line: &RawLine) -> (Self, Option<DraftAgendaItem>) {
        let text = line.text.as_str();
        let date = find_date(text);
        let times = find_times(text);

        if self.take_end_time(date.is_none(), &times) {
            self.retype(text);
            return (self, None);
        }

        if let Some(date) = &date {
            self.current_date = Some(date.clone());
        }

        let opened = match (times.first(), self.current_date.clone()) {
            (Some(start), Some(date)) => Some(self.open_draft(date, start, times.get(1).copied())),
            _ => None,
        };

        let sealed = match opened {
            Some(draft) => std::mem::replace(&mut self.state, AccumulatorState::Open(draft))
                .close()
                .and_then(seal),
            None => {
                if date.is_none() && times.is_empty() {
                    self.fill(text, line.char_len());
                    if is_section_header(text) {
                        self.current_section = Some(text.to_string());
                    }
                }
                None
            }
        };

        self.retype(text);

        (self, sealed)
    }

    /// Seal the open draft, if any, at end of input
    pub fn finish(self) -> Option<DraftAgendaItem> {
        self.state.close().and_then(seal)
    }

    fn open_draft(&self, date: String, start: &str, end: Option<&str>) -> OpenAgendaDraft {
        let start_time = normalize_time(start);
        let end_time = end
            .map(normalize_time)
            .unwrap_or_else(|| start_time.clone());

        OpenAgendaDraft {
            item: DraftAgendaItem {
                date,
                start_time,
                end_time,
                section: self.current_section.clone(),
                item_type: AgendaItemType::Session,
                ..Default::default()
            },
            awaiting_end_time: end.is_none(),
        }
    }

    /// Consume the line after an opening time line when it carries the end time
    fn take_end_time(&mut self, no_date: bool, times: &[&str]) -> bool {
        let Some(draft) = self.state.draft_mut() else {
            return false;
        };
        if !std::mem::take(&mut draft.awaiting_end_time) {
            return false;
        }
        match times.first() {
            Some(end) if no_date => {
                draft.item.end_time = normalize_time(end);
                true
            }
            _ => false,
        }
    }

    /// Keywords on any line of an open draft overwrite its type
    fn retype(&mut self, text: &str) {
        if let Some(draft) = self.state.draft_mut() {
            if let Some(kind) = classify_category(text) {
                draft.item.item_type = kind;
            }
        }
    }

    fn fill(&mut self, text: &str, len: usize) {
        let resolver = self.resolver;
        let Some(draft) = self.state.draft_mut() else {
            return;
        };
        let item = &mut draft.item;

        if item.title.is_empty() {
            if len > TITLE_MIN_CHARS {
                let (title, speaker_ids) = resolver.split_title(text);
                item.title = title;
                item.speaker_ids = speaker_ids;
            }
        } else if let Some(moderator) = labeled_value(text, MODERATOR_LABELS) {
            item.moderator = Some(moderator);
        } else if let Some(location) = labeled_value(text, LOCATION_LABELS) {
            item.location = Some(location);
        } else if text != item.title && len > DESCRIPTION_MIN_CHARS {
            if !item.description.is_empty() {
                item.description.push(' ');
            }
            item.description.push_str(text);
        }
    }
}

fn seal(draft: OpenAgendaDraft) -> Option<DraftAgendaItem> {
    if draft.item.is_complete() {
        Some(draft.item)
    } else {
        debug!(
            "Dropping untitled agenda draft at {} {}",
            draft.item.date, draft.item.start_time
        );
        None
    }
}

/// Run the agenda accumulator over every line
pub fn accumulate_agenda(lines: &[RawLine], catalog: &[KnownSpeaker]) -> Vec<DraftAgendaItem> {
    let mut accumulator = AgendaAccumulator::new(catalog);
    let mut items = Vec::new();

    for line in lines {
        let (next, sealed) = accumulator.step(line);
        accumulator = next;
        items.extend(sealed);
    }

    items.extend(accumulator.finish());
    items
}
