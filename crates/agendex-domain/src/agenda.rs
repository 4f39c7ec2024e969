//! Agenda module - session records recovered from a conference program

use std::fmt;

/// Kind of agenda slot
///
/// Every slot starts as a `Session`; category keywords found in its text
/// may override it with one of the other kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgendaItemType {
    /// Regular talk or lecture
    #[default]
    Session,

    /// Coffee break or recess
    Break,

    /// Breakfast, lunch or dinner
    Meal,

    /// Opening / welcome remarks
    Welcome,

    /// Closing remarks
    Closing,

    /// Hands-on workshop
    Workshop,

    /// Questions and answers
    Qna,
}

impl AgendaItemType {
    /// All kinds, in declaration order
    pub const ALL: [AgendaItemType; 7] = [
        AgendaItemType::Session,
        AgendaItemType::Break,
        AgendaItemType::Meal,
        AgendaItemType::Welcome,
        AgendaItemType::Closing,
        AgendaItemType::Workshop,
        AgendaItemType::Qna,
    ];

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AgendaItemType::Session => "session",
            AgendaItemType::Break => "break",
            AgendaItemType::Meal => "meal",
            AgendaItemType::Welcome => "welcome",
            AgendaItemType::Closing => "closing",
            AgendaItemType::Workshop => "workshop",
            AgendaItemType::Qna => "qna",
        }
    }

    /// Parse a type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for AgendaItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgendaItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid agenda item type: {}", s))
    }
}

/// An agenda slot recovered from unstructured program text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftAgendaItem {
    /// Session title, never empty once sealed
    pub title: String,

    /// Additional lines following the title, space-joined
    pub description: String,

    /// Day of the session (`YYYY-MM-DD`)
    pub date: String,

    /// Start time (`HH:MM`, 24-hour)
    pub start_time: String,

    /// End time (`HH:MM`); equals `start_time` when no end was found
    pub end_time: String,

    /// Catalog identifiers of speakers named in the title line
    pub speaker_ids: Vec<String>,

    /// Kind of slot
    pub item_type: AgendaItemType,

    /// Session moderator, when stated
    pub moderator: Option<String>,

    /// Room or venue, when stated
    pub location: Option<String>,

    /// Program section heading in effect when the slot was opened
    pub section: Option<String>,
}

impl DraftAgendaItem {
    /// Whether the item satisfies the sealing invariant
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parse() {
        assert_eq!(AgendaItemType::parse("QNA"), Some(AgendaItemType::Qna));
        assert_eq!(AgendaItemType::parse(" meal "), Some(AgendaItemType::Meal));
        assert_eq!(AgendaItemType::parse("keynote"), None);
    }

    #[test]
    fn test_type_from_str_error() {
        let err = "keynote".parse::<AgendaItemType>().unwrap_err();
        assert!(err.contains("keynote"));
    }

    #[test]
    fn test_default_is_session() {
        let item = DraftAgendaItem::default();
        assert_eq!(item.item_type, AgendaItemType::Session);
        assert!(!item.is_complete());
    }
}
