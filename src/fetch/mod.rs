//! Page fetching module
//!
//! One GET per requested page number against the remote collection
//! endpoint, with failures classified into the crate's error taxonomy.
//!
//! # Overview
//!
//! - `PageFetcher` - issues a single request per page and decodes the body
//! - `FetcherConfig` - base URL, timeout, user agent, page parameter name
//!
//! No retries and no backoff: every failure surfaces immediately and a new
//! page change is the only retry path.

mod fetcher;

pub use fetcher::{FetcherConfig, FetcherConfigBuilder, PageFetcher, DEFAULT_BASE_URL};
