//! I/O modules for background market-data fetching.

pub mod async_fetcher;

// Re-export commonly used types
pub use async_fetcher::{AsyncFetcher, FetchRequest, FetchResult};
