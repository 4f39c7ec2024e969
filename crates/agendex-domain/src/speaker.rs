//! Speaker module - catalog entries and extracted speaker profiles

/// A speaker already known to the caller
///
/// The catalog is supplied as an ordered slice; the order decides which
/// entry wins when one name is a substring of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownSpeaker {
    /// Caller-defined identifier
    pub id: String,

    /// Display name as it is expected to appear in program text
    pub name: String,
}

impl KnownSpeaker {
    /// Create a new catalog entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A speaker profile recovered from unstructured text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftSpeakerProfile {
    /// Speaker name without honorific, never empty once sealed
    pub name: String,

    /// Stated specialty, or the configured placeholder
    pub specialty: String,

    /// Free-form biography, space-joined from consecutive lines
    pub bio: String,

    /// Slug suitable for locating a portrait asset
    pub image_hint: String,

    /// Bullet-point credentials listed under the speaker
    pub qualifications: Vec<String>,
}

impl DraftSpeakerProfile {
    /// Whether the profile satisfies the sealing invariant
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
