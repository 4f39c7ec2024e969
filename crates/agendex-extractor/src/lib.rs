//! Agendex Extractor
//!
//! Turns loosely formatted conference-program text into structured agenda
//! sessions and speaker profiles, without a grammar or schema markers in the
//! source.
//!
//! # Architecture
//!
//! ```text
//! raw text → segment_lines → classifiers + SpeakerResolver → accumulator
//!                                                              │ (empty?)
//!                                                              └→ fallback pass
//! ```
//!
//! The agenda and speaker pipelines share the segmenter and classifiers but
//! are otherwise independent. Both run synchronously in a single pass over
//! the lines, in source order, and never fail on irregular content: the only
//! failure signal is an empty result.
//!
//! # Example Usage
//!
//! ```
//! use agendex_domain::{AgendaItemType, KnownSpeaker};
//! use agendex_extractor::{extract_agenda, extract_speakers};
//!
//! let program = concat!(
//!     "14/11/2025\n08:00\n08:10\nBienvenida\n",
//!     "09:00\nManejo de Dislipidemia Dr. Juan Pérez",
//! );
//! let speakers = vec![KnownSpeaker::new("s1", "Juan Pérez")];
//!
//! let items = extract_agenda(program, &speakers, "2025-11-01");
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].item_type, AgendaItemType::Welcome);
//! assert_eq!(items[1].speaker_ids, vec!["s1".to_string()]);
//!
//! let profiles = extract_speakers("Dr. Ana Gómez, Cardiología");
//! assert_eq!(profiles[0].specialty, "Cardiología");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod extractor;
pub mod segment;
pub mod classify;
pub mod resolver;
pub mod state;
pub mod agenda;
pub mod speakers;
pub mod fallback;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::{ExtractorConfig, DEFAULT_BIO, DEFAULT_SPECIALTY};
pub use types::{
    AgendaReport, AgendaRequest, ExtractionReport, ExtractionStrategy, SpeakerReport,
};
pub use extractor::{extract_agenda, extract_speakers, Extractor};
pub use segment::segment_lines;
pub use resolver::{SpeakerMatch, SpeakerResolver};
pub use state::AccumulatorState;
pub use agenda::AgendaAccumulator;
pub use speakers::SpeakerAccumulator;
