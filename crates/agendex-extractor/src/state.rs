//! Accumulator state shared by the agenda and speaker reducers

/// At most one draft is open per accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulatorState<D> {
    /// No draft in progress
    Idle,

    /// A draft is being filled by subsequent lines
    Open(D),
}

impl<D> AccumulatorState<D> {
    /// Whether a draft is in progress
    pub fn is_open(&self) -> bool {
        matches!(self, AccumulatorState::Open(_))
    }

    /// Mutable access to the open draft
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            AccumulatorState::Open(draft) => Some(draft),
            AccumulatorState::Idle => None,
        }
    }

    /// Close the state, handing back the draft if one was open
    pub fn close(self) -> Option<D> {
        match self {
            AccumulatorState::Open(draft) => Some(draft),
            AccumulatorState::Idle => None,
        }
    }
}

impl<D> Default for AccumulatorState<D> {
    fn default() -> Self {
        AccumulatorState::Idle
    }
}
