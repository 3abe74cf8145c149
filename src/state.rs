//! List and error state for the viewer
//!
//! The (list, error) pair is a single-owner mutable cell written only by
//! the fetch-settlement path. The list is replaced wholesale, never mutated
//! in place. A generation counter tracks replacement *identity*: it bumps on
//! every successful replacement, including one whose content is element-wise
//! identical to the previous list, and that bump is what drives the scroll
//! side effect.

use crate::entity::Character;
use crate::error::Error;

/// The two shapes the displayed list can take
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// The most recently fetched page, in remote order
    Populated(Vec<Character>),
}

impl ListState {
    /// The renderable records, empty when nothing is populated
    pub fn records(&self) -> &[Character] {
        match self {
            ListState::Empty => &[],
            ListState::Populated(records) => records,
        }
    }

    /// Whether a page has been populated
    pub fn is_populated(&self) -> bool {
        matches!(self, ListState::Populated(_))
    }
}

/// The viewer's observable state: list, error, and replacement generation
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    list: ListState,
    error: Option<String>,
    generation: u64,
}

impl ViewState {
    /// Create an empty view state
    pub fn new() -> Self {
        Self::default()
    }

    /// The current list
    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// The current error message, if any
    ///
    /// Presentation checks this first: while set, the list is not rendered
    /// even though it may still hold stale records.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replacement counter; bumps once per successful list replacement
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a successful fetch: replace the list, clear the error
    pub fn apply_success(&mut self, records: Vec<Character>) {
        self.list = ListState::Populated(records);
        self.error = None;
        self.generation += 1;
    }

    /// Apply a failed fetch: set the error, leave the list untouched
    ///
    /// No replacement happened, so the generation does not move and no
    /// scroll command will fire.
    pub fn apply_failure(&mut self, err: &Error) {
        self.error = Some(err.display_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Character;
    use pretty_assertions::assert_eq;

    fn character(id: u64, name: &str) -> Character {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.list(), &ListState::Empty);
        assert!(state.error().is_none());
        assert_eq!(state.generation(), 0);
        assert!(state.list().records().is_empty());
    }

    #[test]
    fn test_success_replaces_list_and_clears_error() {
        let mut state = ViewState::new();
        state.apply_failure(&Error::network("down"));
        assert!(state.error().is_some());

        state.apply_success(vec![character(1, "Rick"), character(2, "Morty")]);
        assert!(state.error().is_none());
        assert!(state.list().is_populated());
        assert_eq!(state.list().records().len(), 2);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_failure_keeps_stale_list() {
        let mut state = ViewState::new();
        state.apply_success(vec![character(1, "Rick")]);

        state.apply_failure(&Error::http_status(500, "Internal Server Error"));
        assert_eq!(state.error(), Some("HTTP 500: Internal Server Error"));
        // Stale records remain structurally present, just not rendered
        assert_eq!(state.list().records().len(), 1);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_identical_replacement_still_bumps_generation() {
        let mut state = ViewState::new();
        let records = vec![character(1, "Rick")];

        state.apply_success(records.clone());
        state.apply_success(records);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_failure_does_not_bump_generation() {
        let mut state = ViewState::new();
        state.apply_success(vec![character(1, "Rick")]);
        state.apply_failure(&Error::network("timed out"));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_empty_page_is_populated() {
        // An empty `results` array is a valid page, distinct from Empty
        let mut state = ViewState::new();
        state.apply_success(Vec::new());
        assert!(state.list().is_populated());
        assert!(state.list().records().is_empty());
        assert_eq!(state.generation(), 1);
    }
}
