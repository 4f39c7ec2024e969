//! Extraction pipelines and the configurable Extractor facade

use crate::agenda::accumulate_agenda;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fallback::{fallback_agenda, fallback_speakers};
use crate::segment::segment_lines;
use crate::speakers::accumulate_speakers;
use crate::types::{
    AgendaReport, AgendaRequest, ExtractionReport, ExtractionStrategy, SpeakerReport,
};
use agendex_domain::{DraftAgendaItem, DraftSpeakerProfile, KnownSpeaker, RawLine};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Extract agenda items with default settings
///
/// Pure and infallible: unrecognizable text yields an empty list.
pub fn extract_agenda(
    raw_text: &str,
    known_speakers: &[KnownSpeaker],
    current_date_fallback: &str,
) -> Vec<DraftAgendaItem> {
    agenda_pipeline(
        raw_text,
        known_speakers,
        current_date_fallback,
        &ExtractorConfig::default(),
    )
    .records
}

/// Extract speaker profiles with default settings
///
/// Pure and infallible: unrecognizable text yields an empty list.
pub fn extract_speakers(raw_text: &str) -> Vec<DraftSpeakerProfile> {
    speaker_pipeline(raw_text, &ExtractorConfig::default()).records
}

/// Configured entry point that validates calling contracts and reports how
/// records were obtained
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract agenda items from a program
    pub fn extract_agenda(&self, request: &AgendaRequest) -> Result<AgendaReport, ExtractorError> {
        self.check_length(&request.text)?;
        NaiveDate::parse_from_str(&request.current_date_fallback, "%Y-%m-%d")
            .map_err(|_| ExtractorError::InvalidDate(request.current_date_fallback.clone()))?;

        info!(
            "Starting agenda extraction: {} chars, {} known speakers",
            request.text.len(),
            request.known_speakers.len()
        );

        let report = agenda_pipeline(
            &request.text,
            &request.known_speakers,
            &request.current_date_fallback,
            &self.config,
        );
        log_report("agenda", &report);
        Ok(report)
    }

    /// Extract speaker profiles from a program
    pub fn extract_speakers(&self, text: &str) -> Result<SpeakerReport, ExtractorError> {
        self.check_length(text)?;

        info!("Starting speaker extraction: {} chars", text.len());

        let report = speaker_pipeline(text, &self.config);
        log_report("speaker", &report);
        Ok(report)
    }

    fn check_length(&self, text: &str) -> Result<(), ExtractorError> {
        let len = text.chars().count();
        if len > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(len, self.config.max_text_length));
        }
        Ok(())
    }
}

fn agenda_pipeline(
    raw_text: &str,
    known_speakers: &[KnownSpeaker],
    current_date_fallback: &str,
    config: &ExtractorConfig,
) -> AgendaReport {
    let lines = segment_lines(raw_text);
    run_with_fallback(
        raw_text,
        &lines,
        config,
        |lines| accumulate_agenda(lines, known_speakers),
        |lines| fallback_agenda(lines, current_date_fallback),
    )
}

fn speaker_pipeline(raw_text: &str, config: &ExtractorConfig) -> SpeakerReport {
    let lines = segment_lines(raw_text);
    run_with_fallback(
        raw_text,
        &lines,
        config,
        |lines| accumulate_speakers(lines, &config.default_specialty),
        |lines| fallback_speakers(lines, &config.default_specialty, &config.default_bio),
    )
}

fn run_with_fallback<T>(
    raw_text: &str,
    lines: &[RawLine],
    config: &ExtractorConfig,
    primary: impl FnOnce(&[RawLine]) -> Vec<T>,
    fallback: impl FnOnce(&[RawLine]) -> Vec<T>,
) -> ExtractionReport<T> {
    let mut records = primary(lines);
    let mut strategy = ExtractionStrategy::Primary;

    if records.is_empty() && config.enable_fallback {
        debug!("Primary pass found nothing in {} lines, running fallback", lines.len());
        records = fallback(lines);
        strategy = ExtractionStrategy::Fallback;
    }

    let excerpt = if records.is_empty() {
        strategy = ExtractionStrategy::Empty;
        Some(excerpt(raw_text, config.excerpt_chars))
    } else {
        None
    };

    ExtractionReport {
        records,
        strategy,
        lines_scanned: lines.len(),
        excerpt,
    }
}

fn excerpt(raw_text: &str, max_chars: usize) -> String {
    raw_text.trim().chars().take(max_chars).collect()
}

fn log_report<T>(kind: &str, report: &ExtractionReport<T>) {
    match &report.excerpt {
        Some(excerpt) => warn!(
            "No {} entities recognized in {} lines; text begins: {:?}",
            kind, report.lines_scanned, excerpt
        ),
        None => info!(
            "{} extraction complete: {} records via {} pass",
            kind,
            report.records.len(),
            report.strategy.as_str()
        ),
    }
}
