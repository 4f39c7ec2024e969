//! Speakers command implementation.

use super::read_input;
use crate::cli::SpeakersArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use agendex_extractor::{ExtractionStrategy, Extractor};

/// Execute the speakers command.
pub fn execute_speakers(args: SpeakersArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;

    let extractor = Extractor::new(config.extractor.clone())?;
    let report = extractor.extract_speakers(&text)?;

    if let Some(excerpt) = &report.excerpt {
        eprintln!(
            "{}",
            formatter.warning(&format!("No speakers recognized. Text begins: {:?}", excerpt))
        );
    } else if report.strategy == ExtractionStrategy::Fallback {
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Recovered {} speaker(s) with the fallback pass; bios are placeholders",
                report.records.len()
            ))
        );
    }

    println!("{}", formatter.format_speakers(&report.records)?);
    Ok(())
}
