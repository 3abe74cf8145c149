//! Viewer state machine
//!
//! Wires the pager, fetcher, view state and scroll synchronizer into one
//! event-driven loop. The whole machine is `Idle(page, list, error)`:
//! navigation moves the page and issues exactly one fetch per change, each
//! settlement replaces the (list, error) pair atomically, and every list
//! replacement fires one scroll-to-top command.
//!
//! All state writes happen on the viewer's own loop; fetches run as
//! spawned tasks and report back through an internal channel, so mutual
//! exclusion is structural rather than locked.
//!
//! Completions are tagged with the page they were issued for and a
//! completion whose page no longer matches the current one is discarded:
//! a slow response for a page the user already left can never overwrite
//! fresher data.

mod types;

pub(crate) use types::Settlement;
pub use types::{NavEvent, SettleOutcome, Snapshot};

use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::pager::Pager;
use crate::scroll::{ScrollSync, ScrollTarget};
use crate::state::ViewState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Buffered completions; navigation is human-paced so a small bound is plenty
const SETTLEMENT_BUFFER: usize = 16;

/// The paginated remote-list viewer
pub struct Viewer {
    fetcher: Arc<PageFetcher>,
    pager: Pager,
    state: ViewState,
    scroll: ScrollSync,
    total_pages: Option<u32>,
    settlements_tx: mpsc::Sender<Settlement>,
    settlements_rx: mpsc::Receiver<Settlement>,
}

impl Viewer {
    /// Create a viewer starting at page 1
    pub fn new(fetcher: PageFetcher) -> Self {
        Self::starting_at(fetcher, Pager::new())
    }

    /// Create a viewer starting at a specific page
    pub fn starting_at(fetcher: PageFetcher, pager: Pager) -> Self {
        let (settlements_tx, settlements_rx) = mpsc::channel(SETTLEMENT_BUFFER);
        Self {
            fetcher: Arc::new(fetcher),
            pager,
            state: ViewState::new(),
            scroll: ScrollSync::new(),
            total_pages: None,
            settlements_tx,
            settlements_rx,
        }
    }

    /// Mount the presentation layer's scroll capability
    pub fn mount_scroll(&mut self, target: Box<dyn ScrollTarget>) {
        self.scroll.mount(target);
    }

    /// Unmount the scroll capability
    pub fn unmount_scroll(&mut self) {
        self.scroll.unmount();
    }

    /// Current page number
    pub fn page(&self) -> u32 {
        self.pager.current()
    }

    /// A renderable snapshot of the observable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            page: self.pager.current(),
            records: self.state.list().records().to_vec(),
            error: self.state.error().map(String::from),
            generation: self.state.generation(),
            total_pages: self.total_pages,
        }
    }

    /// Issue the initial fetch for the starting page
    ///
    /// The machine starts as `Idle(1, Empty, none)` immediately followed by
    /// this first fetch.
    pub fn start(&mut self) {
        self.dispatch_fetch(self.pager.current());
    }

    /// Handle one navigation event
    ///
    /// Each page change schedules exactly one fetch. A `Prev` at the floor
    /// leaves the page alone and schedules nothing.
    pub fn handle(&mut self, event: NavEvent) {
        match event {
            NavEvent::Next => {
                let page = self.pager.advance();
                self.dispatch_fetch(page);
            }
            NavEvent::Prev => {
                if self.pager.retreat() {
                    self.dispatch_fetch(self.pager.current());
                } else {
                    debug!("already at first page, nothing to fetch");
                }
            }
        }
    }

    /// Re-fetch the current page without moving it
    ///
    /// The only recovery path after a failure: the error clears solely on
    /// a subsequent successful fetch.
    pub fn refresh(&mut self) {
        self.dispatch_fetch(self.pager.current());
    }

    /// Wait for the next fetch completion and apply it
    pub async fn settle(&mut self) -> Result<SettleOutcome> {
        let settlement = self
            .settlements_rx
            .recv()
            .await
            .ok_or_else(|| Error::loop_stopped("settlement channel closed"))?;
        Ok(self.apply(settlement))
    }

    /// Run the viewer until the presentation layer closes the event channel
    ///
    /// Issues the initial fetch, then multiplexes navigation events against
    /// fetch completions. There is no terminal state of its own; the loop
    /// ends only when `events` is closed and drained.
    pub async fn run(&mut self, mut events: mpsc::Receiver<NavEvent>) -> Result<()> {
        self.start();
        loop {
            tokio::select! {
                event = events.recv() => {
                    match event {
                        Some(event) => self.handle(event),
                        None => {
                            info!("event channel closed, stopping viewer loop");
                            return Ok(());
                        }
                    }
                }
                settlement = self.settlements_rx.recv() => {
                    let settlement = settlement
                        .ok_or_else(|| Error::loop_stopped("settlement channel closed"))?;
                    self.apply(settlement);
                }
            }
        }
    }

    /// Spawn one fetch task for the given page
    fn dispatch_fetch(&self, page: u32) {
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.settlements_tx.clone();
        debug!(page, "dispatching fetch");
        tokio::spawn(async move {
            let result = fetcher.fetch_page(page).await;
            // Receiver only drops when the viewer does; nothing to do then
            let _ = tx.send(Settlement { page, result }).await;
        });
    }

    /// Apply one settlement to the (list, error) pair
    fn apply(&mut self, settlement: Settlement) -> SettleOutcome {
        let current = self.pager.current();
        if settlement.page != current {
            debug!(
                stale = settlement.page,
                current, "discarding completion for a page the user left"
            );
            return SettleOutcome::DiscardedStale;
        }

        match settlement.result {
            Ok(fetched) => {
                info!(page = settlement.page, records = fetched.len(), "page applied");
                self.total_pages = Some(fetched.info.pages);
                self.state.apply_success(fetched.results);
                self.scroll.observe(self.state.generation());
            }
            Err(err) => {
                warn!(page = settlement.page, %err, "fetch failed");
                self.state.apply_failure(&err);
            }
        }
        SettleOutcome::Applied
    }
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("page", &self.pager.current())
            .field("generation", &self.state.generation())
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
