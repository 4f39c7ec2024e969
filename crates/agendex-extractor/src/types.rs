//! Request and report types for extraction

use agendex_domain::{DraftAgendaItem, DraftSpeakerProfile, KnownSpeaker};

/// Request to extract an agenda from program text
#[derive(Debug, Clone)]
pub struct AgendaRequest {
    /// Plain text recovered from the program document
    pub text: String,

    /// Speakers to tag, in resolution order
    pub known_speakers: Vec<KnownSpeaker>,

    /// ISO date used by the fallback pass when the text never states one
    pub current_date_fallback: String,
}

/// Which pass produced the records of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// The stateful accumulator recognized at least one entity
    Primary,

    /// The accumulator found nothing; the fallback pass did
    Fallback,

    /// Neither pass recognized anything
    Empty,
}

impl ExtractionStrategy {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::Primary => "primary",
            ExtractionStrategy::Fallback => "fallback",
            ExtractionStrategy::Empty => "empty",
        }
    }
}

/// Result of an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport<T> {
    /// Sealed records in source order
    pub records: Vec<T>,

    /// Pass that produced `records`
    pub strategy: ExtractionStrategy,

    /// Number of non-empty lines scanned
    pub lines_scanned: usize,

    /// Leading text of the input, present only when `records` is empty
    pub excerpt: Option<String>,
}

impl<T> ExtractionReport<T> {
    /// Whether nothing was recognized
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Agenda extraction result
pub type AgendaReport = ExtractionReport<DraftAgendaItem>;

/// Speaker extraction result
pub type SpeakerReport = ExtractionReport<DraftSpeakerProfile>;
