//! # pagekeeper
//!
//! A paginated remote-list viewer core: fetches pages of character records
//! from a remote collection endpoint, holds the currently displayed page in
//! memory, and lets a user step forward and backward through pages while
//! resetting the view scroll on every page change.
//!
//! ## Features
//!
//! - **Page navigation**: next/previous with a floor clamp at page 1
//! - **One fetch per page change**: no retries, no debounce, no caching
//! - **Atomic state replacement**: the (list, error) pair is replaced
//!   wholesale on every settled fetch
//! - **Scroll sync**: one scroll-to-top command per list replacement,
//!   keyed to replacement identity rather than content equality
//! - **Last-issued-wins**: completions for a page the user already left
//!   are discarded instead of overwriting fresher data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekeeper::{NavEvent, PageFetcher, Viewer, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut viewer = Viewer::new(PageFetcher::new()?);
//!     viewer.start();
//!     viewer.settle().await?;
//!
//!     viewer.handle(NavEvent::Next);
//!     viewer.settle().await?;
//!
//!     let snapshot = viewer.snapshot();
//!     println!("page {}: {} records", snapshot.page, snapshot.records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! user input ──> Viewer ──> Pager (page number, floor 1)
//!                  │
//!                  ├──> PageFetcher ── GET <base-url>?page=N ──> remote
//!                  │          │
//!                  │     Settlement (page, result)
//!                  │          │
//!                  ├──> ViewState (list | error, generation)
//!                  │          │
//!                  └──> ScrollSync ──> ScrollTarget (presentation layer)
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Entity records and the wire envelope
pub mod entity;

/// Page-number cell with floor clamp
pub mod pager;

/// Page fetching against the remote collection
pub mod fetch;

/// List and error state
pub mod state;

/// Scroll synchronization with the presentation layer
pub mod scroll;

/// The viewer state machine and event loop
pub mod viewer;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use entity::{Character, CharacterPage, PageInfo, Place};
pub use error::{Error, Result};
pub use fetch::{FetcherConfig, PageFetcher};
pub use pager::{Pager, FIRST_PAGE};
pub use scroll::{ScrollSync, ScrollTarget};
pub use state::{ListState, ViewState};
pub use viewer::{NavEvent, SettleOutcome, Snapshot, Viewer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
