pub mod catalog;
pub mod classify;
pub mod cli;
pub mod currency;
pub mod error;
pub mod flatten;
pub mod model;
pub mod search;
pub mod sort;
pub mod text;
pub mod tracing;

pub use catalog::{Catalog, SummaryCounts};
pub use model::{DisplayRow, PriceEntry, ServiceDefinition};
pub use search::{CategoryFilter, SearchIndex, SearchIndexEntry, highlight};
pub use text::normalize;
