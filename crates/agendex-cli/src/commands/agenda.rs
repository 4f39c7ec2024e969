//! Agenda command implementation.

use super::read_input;
use crate::cli::AgendaArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use agendex_domain::KnownSpeaker;
use agendex_extractor::{AgendaRequest, ExtractionStrategy, Extractor};
use serde::Deserialize;
use std::fs;
use tracing::debug;

/// Execute the agenda command.
pub fn execute_agenda(args: AgendaArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;

    let known_speakers = match &args.speakers {
        Some(path) => parse_catalog(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    debug!("Loaded {} known speaker(s)", known_speakers.len());

    let request = AgendaRequest {
        text,
        known_speakers,
        current_date_fallback: args.date.unwrap_or_else(today),
    };

    let extractor = Extractor::new(config.extractor.clone())?;
    let report = extractor.extract_agenda(&request)?;

    if let Some(excerpt) = &report.excerpt {
        eprintln!(
            "{}",
            formatter.warning(&format!("No agenda items recognized. Text begins: {:?}", excerpt))
        );
    } else if report.strategy == ExtractionStrategy::Fallback {
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Recovered {} item(s) with the fallback pass",
                report.records.len()
            ))
        );
    }

    println!("{}", formatter.format_agenda(&report.records)?);
    Ok(())
}

/// Catalog entry as written in the speakers JSON file.
#[derive(Debug, Deserialize)]
struct SpeakerDefinition {
    id: String,
    name: String,
}

/// Parse a JSON array of `{id, name}` objects, keeping file order.
pub fn parse_catalog(json: &str) -> Result<Vec<KnownSpeaker>> {
    let definitions: Vec<SpeakerDefinition> = serde_json::from_str(json)?;

    definitions
        .into_iter()
        .enumerate()
        .map(|(idx, def)| {
            if def.id.trim().is_empty() {
                return Err(CliError::InvalidInput(format!(
                    "Speaker #{} has an empty id",
                    idx + 1
                )));
            }
            Ok(KnownSpeaker::new(def.id, def.name))
        })
        .collect()
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
