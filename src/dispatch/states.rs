use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    /// Caller supplied a name and arguments
    Created,
    /// The registry resolved the name to a registration
    Resolved,
    /// The registration's predicate accepted the arguments
    PredicateChecked,
    /// The action's perform step is running
    Performing,
    /// The action ran and produced a result
    Completed,
    /// The predicate declined the dispatch
    Rejected,
    /// Resolution or the perform step failed
    Failed,
}

impl DispatchState {
    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected | Self::Failed)
    }

    /// Check if the dispatch is still progressing
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Resolved => write!(f, "resolved"),
            Self::PredicateChecked => write!(f, "predicate_checked"),
            Self::Performing => write!(f, "performing"),
            Self::Completed => write!(f, "completed"),
            Self::Rejected => write!(f, "rejected"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for DispatchState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "resolved" => Ok(Self::Resolved),
            "predicate_checked" => Ok(Self::PredicateChecked),
            "performing" => Ok(Self::Performing),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("Invalid dispatch state: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_terminal_states() {
        assert!(DispatchState::Completed.is_terminal());
        assert!(DispatchState::Rejected.is_terminal());
        assert!(DispatchState::Failed.is_terminal());

        assert!(DispatchState::Created.is_active());
        assert!(DispatchState::Resolved.is_active());
        assert!(DispatchState::PredicateChecked.is_active());
        assert!(DispatchState::Performing.is_active());
    }

    #[test]
    fn test_display_from_str_round_trip() {
        let states = [
            DispatchState::Created,
            DispatchState::Resolved,
            DispatchState::PredicateChecked,
            DispatchState::Performing,
            DispatchState::Completed,
            DispatchState::Rejected,
            DispatchState::Failed,
        ];

        for state in states {
            assert_eq!(DispatchState::from_str(&state.to_string()).unwrap(), state);
        }
        assert!(DispatchState::from_str("warped").is_err());
    }
}
