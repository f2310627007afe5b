//! Countryscope Dataset
//!
//! The single source of truth for every chart:
//!
//! - **types**: Core data structures (Row, Continent, Measure, YearRange)
//! - **table**: The read-only in-memory table and its derived views
//! - **loader**: CSV sources (HTTP or file) and parsing
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! Startup:
//!   Source (URL | file) → CSV text → Rows → Table (Arc, read-only)
//!
//! Per request:
//!   Table → range filter → latest snapshot / country filter → chart builder
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use countryscope::dataset::{load_table, YearRange};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_table("gapminder_unfiltered.csv", Duration::from_secs(30)).await?;
//!
//!     let snapshot = table.latest_snapshot(Some(YearRange::new(1990.0, 2000.0)));
//!     println!("{} countries reported between 1990 and 2000", snapshot.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod table;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use error::{LoadError, LoadResult};
pub use loader::{
    load_from, load_table, parse_csv, source_for, DatasetSource, FileSource, HttpSource,
};
pub use table::{Table, TableSummary};
pub use types::{Continent, Measure, Row, YearRange};
