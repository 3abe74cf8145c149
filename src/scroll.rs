//! Scroll synchronization with the presentation layer
//!
//! The presentation layer owns the scrollable view and hands the core a
//! narrow capability to reset it. The core never reaches into presentation
//! internals; it only fires `scroll_to_top` once per list replacement.

use tracing::debug;

/// Capability to scroll a mounted view back to offset 0
///
/// Implemented by the presentation layer. The `animated` flag is advisory;
/// a target without animation support may ignore it.
pub trait ScrollTarget: Send {
    /// Scroll the view to the top (offset 0)
    fn scroll_to_top(&mut self, animated: bool);
}

/// Emits one scroll-to-top command per observed list replacement
///
/// Keyed strictly to replacement identity via the view state's generation
/// counter, not to content equality. When no target is mounted the command
/// is dropped, never queued.
pub struct ScrollSync {
    target: Option<Box<dyn ScrollTarget>>,
    last_seen: u64,
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSync {
    /// Create a synchronizer with no mounted target
    pub fn new() -> Self {
        Self {
            target: None,
            last_seen: 0,
        }
    }

    /// Mount the presentation layer's scroll capability
    pub fn mount(&mut self, target: Box<dyn ScrollTarget>) {
        self.target = Some(target);
    }

    /// Unmount the target; subsequent commands are dropped
    pub fn unmount(&mut self) {
        self.target = None;
    }

    /// Whether a target is currently mounted
    pub fn is_mounted(&self) -> bool {
        self.target.is_some()
    }

    /// Observe the current replacement generation and fire if it moved
    ///
    /// Fires at most once per generation step even if called repeatedly,
    /// and exactly once per replacement when called after each settlement.
    pub fn observe(&mut self, generation: u64) {
        if generation == self.last_seen {
            return;
        }
        self.last_seen = generation;
        match self.target.as_mut() {
            Some(target) => target.scroll_to_top(true),
            None => debug!("list replaced with no mounted view, dropping scroll command"),
        }
    }
}

impl std::fmt::Debug for ScrollSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSync")
            .field("mounted", &self.target.is_some())
            .field("last_seen", &self.last_seen)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingTarget {
        calls: Arc<AtomicUsize>,
    }

    impl ScrollTarget for CountingTarget {
        fn scroll_to_top(&mut self, animated: bool) {
            assert!(animated);
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting() -> (Box<dyn ScrollTarget>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Box::new(CountingTarget {
                calls: Arc::clone(&calls),
            }),
            calls,
        )
    }

    #[test]
    fn test_fires_once_per_generation() {
        let (target, calls) = counting();
        let mut sync = ScrollSync::new();
        sync.mount(target);

        sync.observe(1);
        sync.observe(1);
        sync.observe(1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sync.observe(2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_fire_without_replacement() {
        let (target, calls) = counting();
        let mut sync = ScrollSync::new();
        sync.mount(target);

        sync.observe(0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmounted_commands_are_dropped_not_queued() {
        let mut sync = ScrollSync::new();
        assert!(!sync.is_mounted());
        // No target mounted: generations advance, nothing queues
        sync.observe(1);
        sync.observe(2);

        let (target, calls) = counting();
        sync.mount(target);
        assert!(sync.is_mounted());
        // Mounting after the fact replays nothing
        sync.observe(2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        sync.observe(3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unmount_stops_firing() {
        let (target, calls) = counting();
        let mut sync = ScrollSync::new();
        sync.mount(target);
        sync.observe(1);
        sync.unmount();
        sync.observe(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
