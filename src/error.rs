//! Error handling types and utilities.

/// A specialized Result type for pricebook operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// where the shell touches the filesystem.
pub type Result<T> = anyhow::Result<T>;

/// Reason a catalog document failed to load.
///
/// These never escape the load stage: [`crate::catalog::Catalog::load`]
/// logs the reason and degrades to an empty-but-functional catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document was not valid JSON or not an object.
    #[error("catalog document is not parseable: {0}")]
    Parse(#[from] serde_json::Error),
}
