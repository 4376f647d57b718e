//! Search over the flattened catalog rows.
//!
//! The index precomputes one normalized haystack per row; queries are a
//! linear token-AND scan over those haystacks. Catalogs are small, so the
//! scan is cheap enough to run synchronously on every keystroke without any
//! rate limiting in the core.

pub mod highlight;
pub mod index;
pub mod query;

pub use highlight::highlight;
pub use index::{SearchIndex, SearchIndexEntry};
pub use query::CategoryFilter;
