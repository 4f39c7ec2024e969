//! Speaker accumulator
//!
//! A name line opens a profile: either an honorific-prefixed line
//! (`Dr. Ana Gómez, Cardiología`) or a line made only of capitalized words
//! (`Luis Ruiz`). Following lines set the specialty, list qualifications or
//! build the bio until the next name line.

use crate::classify::text_after_marker;
use crate::state::AccumulatorState;
use agendex_domain::{DraftSpeakerProfile, RawLine};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Honorific, name, then optional `, specialty`
static TITLED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:doctora|doctor|dra|dr)(?:\.\s*|\s+)([^,]+?)\s*(?:,\s*(.*))?$")
        .expect("valid titled name regex")
});

/// Two or more capitalized words (initials like `R.` allowed), nothing else
static BARE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Lu}(?:\p{Ll}[\p{L}'’\-]*|\.)(?:\s+\p{Lu}(?:\p{Ll}[\p{L}'’\-]*|\.))+$")
        .expect("valid bare name regex")
});

const SPECIALTY_MARKERS: &[&str] = &["especialidad", "specialty", "speciality"];
const BULLETS: &[char] = &['-', '–', '•', '*', '·'];

const BIO_START_MIN_CHARS: usize = 20;
const BIO_APPEND_MIN_CHARS: usize = 10;

/// Reducer from program lines to speaker profiles
#[derive(Debug, Clone)]
pub struct SpeakerAccumulator<'c> {
    state: AccumulatorState<DraftSpeakerProfile>,
    default_specialty: &'c str,
}

impl<'c> SpeakerAccumulator<'c> {
    /// Create an idle accumulator; `default_specialty` fills unstated specialties
    pub fn new(default_specialty: &'c str) -> Self {
        Self {
            state: AccumulatorState::Idle,
            default_specialty,
        }
    }

    /// The current state
    pub fn state(&self) -> &AccumulatorState<DraftSpeakerProfile> {
        &self.state
    }

    /// Feed one line; returns the next accumulator and the profile sealed by this line, if any
    pub fn step(mut self, line: &RawLine) -> (Self, Option<DraftSpeakerProfile>) {
        if let Some(profile) = detect_speaker_start(&line.text, self.default_specialty) {
            let sealed = std::mem::replace(&mut self.state, AccumulatorState::Open(profile))
                .close()
                .and_then(seal);
            return (self, sealed);
        }

        if let Some(profile) = self.state.draft_mut() {
            fill_profile(profile, &line.text, line.char_len());
        }

        (self, None)
    }

    /// Seal the open profile, if any, at end of input
    pub fn finish(self) -> Option<DraftSpeakerProfile> {
        self.state.close().and_then(seal)
    }
}

/// A fresh profile when `line` starts a new speaker entry
pub fn detect_speaker_start(line: &str, default_specialty: &str) -> Option<DraftSpeakerProfile> {
    if let Some(caps) = TITLED_NAME_RE.captures(line) {
        let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        let specialty = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(default_specialty);
        return Some(new_profile(name, specialty));
    }

    if BARE_NAME_RE.is_match(line) {
        return Some(new_profile(line, default_specialty));
    }

    None
}

/// Profile with placeholder-free fields derived from a name
pub(crate) fn new_profile(name: &str, specialty: &str) -> DraftSpeakerProfile {
    DraftSpeakerProfile {
        name: name.to_string(),
        specialty: specialty.to_string(),
        bio: String::new(),
        image_hint: image_hint(name),
        qualifications: Vec::new(),
    }
}

fn fill_profile(profile: &mut DraftSpeakerProfile, text: &str, len: usize) {
    if let Some(specialty) = text_after_marker(text, SPECIALTY_MARKERS) {
        if !specialty.is_empty() {
            profile.specialty = specialty;
        }
    } else if let Some(item) = bullet_item(text) {
        profile.qualifications.push(item);
    } else if profile.bio.is_empty() {
        if len > BIO_START_MIN_CHARS {
            profile.bio = text.to_string();
        }
    } else if len > BIO_APPEND_MIN_CHARS {
        profile.bio.push(' ');
        profile.bio.push_str(text);
    }
}

fn bullet_item(text: &str) -> Option<String> {
    let rest = text.strip_prefix(BULLETS)?.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn seal(profile: DraftSpeakerProfile) -> Option<DraftSpeakerProfile> {
    if profile.is_complete() {
        Some(profile)
    } else {
        debug!("Dropping speaker draft without a name");
        None
    }
}

/// Lower-case ASCII slug of a name: `"Ana Gómez"` becomes `"ana-gomez"`
pub fn image_hint(name: &str) -> String {
    let folded: String = name.to_lowercase().chars().map(fold_accent).collect();
    folded
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Run the speaker accumulator over every line
pub fn accumulate_speakers(lines: &[RawLine], default_specialty: &str) -> Vec<DraftSpeakerProfile> {
    let mut accumulator = SpeakerAccumulator::new(default_specialty);
    let mut profiles = Vec::new();

    for line in lines {
        let (next, sealed) = accumulator.step(line);
        accumulator = next;
        profiles.extend(sealed);
    }

    profiles.extend(accumulator.finish());
    profiles
}
