//! Agendex Domain Layer
//!
//! Value types shared by the extraction engine and its callers. Like every
//! domain crate in this workspace it has ZERO external dependencies: no
//! parsing, no I/O, only the shapes that extraction produces and consumes.
//!
//! ## Key Concepts
//!
//! - **RawLine**: one trimmed, non-empty line of source text and its position
//! - **KnownSpeaker**: read-only catalog entry used for name matching
//! - **DraftAgendaItem**: an agenda session recovered from a program document
//! - **DraftSpeakerProfile**: a speaker biography recovered from a program document
//!
//! Drafts are "sealed" by the engine once complete; nothing in this crate
//! mutates them after that point.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agenda;
pub mod line;
pub mod speaker;

// Re-exports for convenience
pub use agenda::{AgendaItemType, DraftAgendaItem};
pub use line::RawLine;
pub use speaker::{DraftSpeakerProfile, KnownSpeaker};
