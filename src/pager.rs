//! Page-number cell for the pagination controller
//!
//! The page number is the sole driver of downstream recomputation: every
//! change to it schedules exactly one fetch. The floor clamp at 1 here is
//! the only clamp in the system; there is no client-side upper bound.

/// Lowest valid page number
pub const FIRST_PAGE: u32 = 1;

/// The current page number, always >= [`FIRST_PAGE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: FIRST_PAGE }
    }
}

impl Pager {
    /// Create a pager at the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pager at a specific page, clamped to the floor
    pub fn starting_at(page: u32) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
        }
    }

    /// The current page number
    pub fn current(&self) -> u32 {
        self.page
    }

    /// Step forward one page; always changes the page
    pub fn advance(&mut self) -> u32 {
        self.page += 1;
        self.page
    }

    /// Step back one page, clamped to the floor
    ///
    /// Returns `true` if the page actually changed, so the caller can skip
    /// a duplicate fetch when already at the floor.
    pub fn retreat(&mut self) -> bool {
        if self.page > FIRST_PAGE {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_starts_at_first_page() {
        assert_eq!(Pager::new().current(), FIRST_PAGE);
        assert_eq!(Pager::default().current(), FIRST_PAGE);
    }

    #[test_case(0 => 1 ; "zero clamps to floor")]
    #[test_case(1 => 1 ; "floor stays")]
    #[test_case(5 => 5 ; "above floor kept")]
    fn test_starting_at(page: u32) -> u32 {
        Pager::starting_at(page).current()
    }

    #[test]
    fn test_advance_unbounded() {
        let mut pager = Pager::new();
        assert_eq!(pager.advance(), 2);
        assert_eq!(pager.advance(), 3);
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn test_retreat_clamps_at_floor() {
        let mut pager = Pager::new();
        // Any sequence of retreats never drops below the floor
        for _ in 0..10 {
            assert!(!pager.retreat());
            assert_eq!(pager.current(), FIRST_PAGE);
        }
    }

    #[test]
    fn test_retreat_reports_change() {
        let mut pager = Pager::starting_at(3);
        assert!(pager.retreat());
        assert_eq!(pager.current(), 2);
        assert!(pager.retreat());
        assert_eq!(pager.current(), 1);
        assert!(!pager.retreat());
    }

    #[test]
    fn test_advance_then_retreat_round_trips() {
        let mut pager = Pager::starting_at(4);
        pager.advance();
        assert!(pager.retreat());
        assert_eq!(pager.current(), 4);
    }
}
