//! Viewer message and snapshot types

use crate::entity::{Character, CharacterPage};
use crate::error::Result;

/// Navigation events the presentation layer feeds into the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// User requested the next page
    Next,
    /// User requested the previous page
    Prev,
}

/// How a fetch completion was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The completion matched the current page and was applied
    Applied,
    /// The completion was issued for a page the user has since left
    DiscardedStale,
}

/// A completed fetch attempt, tagged with the page it was issued for
#[derive(Debug)]
pub(crate) struct Settlement {
    pub page: u32,
    pub result: Result<CharacterPage>,
}

/// A point-in-time view of the observable state
///
/// What the presentation layer renders: the error takes display priority;
/// while it is set the records are stale and should not be shown.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Current page number
    pub page: u32,
    /// Records of the most recently applied page
    pub records: Vec<Character>,
    /// Current error message, if any
    pub error: Option<String>,
    /// List replacement counter
    pub generation: u64,
    /// Total page count as last reported by the remote, if known
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_event_copy_semantics() {
        let event = NavEvent::Next;
        let copy = event;
        assert_eq!(event, copy);
        assert_ne!(NavEvent::Next, NavEvent::Prev);
    }

    #[test]
    fn test_settle_outcome_eq() {
        assert_eq!(SettleOutcome::Applied, SettleOutcome::Applied);
        assert_ne!(SettleOutcome::Applied, SettleOutcome::DiscardedStale);
    }
}
