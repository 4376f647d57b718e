//! Catalog loading: one immutable snapshot per document load.
//!
//! A [`Catalog`] is rebuilt from scratch on every load and never mutated
//! afterward. Reload means building a new value and swapping it in whole,
//! so readers only ever observe a complete catalog, never a partial rebuild.

use crate::error::CatalogError;
use crate::flatten::flatten;
use crate::model::{
    DisplayRow, RawDocument, ServiceDefinition, coerce_string, price_from_value,
    service_from_value,
};
use crate::search::SearchIndex;
use crate::sort::sort_rows;

/// Note shown when the document itself carries none.
const DEFAULT_NOTE: &str = "Tarifas vigentes según el archivo oficial de la alianza.";

/// Note shown when the document could not be loaded at all.
const UNAVAILABLE_NOTE: &str =
    "No fue posible cargar el archivo de tarifas. Verifica que el documento exista y sea JSON válido.";

/// Collection sizes surfaced to the shell for its summary badge.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryCounts {
    /// Price entries that survived normalization.
    pub price_entries: usize,
    /// Declared services that survived normalization.
    pub services: usize,
}

/// One fully-built catalog snapshot: services, sorted rows, search index and
/// document metadata.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<ServiceDefinition>,
    index: SearchIndex,
    note: String,
    updated_at: Option<String>,
    summary: SummaryCounts,
}

impl Catalog {
    /// Loads a catalog from the raw document text.
    ///
    /// Never fails: an unparsable document degrades to [`Self::unavailable`]
    /// (zero rows, explanatory note) with the reason logged. Malformed
    /// individual entries are dropped inside the parse, not here.
    pub fn load(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!("catalog load failed, serving empty catalog: {err}");
                Self::unavailable()
            }
        }
    }

    /// The empty-but-functional state used when the document is unreachable
    /// or unparsable. Zero rows, searchable, with a user-facing note.
    pub fn unavailable() -> Self {
        Self {
            note: UNAVAILABLE_NOTE.to_string(),
            ..Self::default()
        }
    }

    fn parse(raw: &str) -> Result<Self, CatalogError> {
        let doc: RawDocument = serde_json::from_str(raw)?;

        let services: Vec<ServiceDefinition> =
            doc.services.iter().filter_map(service_from_value).collect();
        let prices: Vec<_> = doc.prices.iter().filter_map(price_from_value).collect();

        let mut rows = flatten(&services, &prices);
        sort_rows(&mut rows, &services);

        let note = coerce_string(&doc.note)
            .map(|n| crate::text::collapse_whitespace(&n))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NOTE.to_string());

        tracing::info!(
            "Loaded catalog: {} services, {} price entries, {} rows",
            services.len(),
            prices.len(),
            rows.len()
        );

        Ok(Self {
            summary: SummaryCounts {
                price_entries: prices.len(),
                services: services.len(),
            },
            updated_at: doc.updated_at(),
            index: SearchIndex::build(rows),
            services,
            note,
        })
    }

    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    /// Declared services that actually have rows, in declaration order. The
    /// shell builds its filter chips from this so empty categories never get
    /// a chip.
    pub fn services_present(&self) -> Vec<&ServiceDefinition> {
        self.services
            .iter()
            .filter(|s| self.index.rows().any(|r| r.service_id == s.id))
            .collect()
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Sorted display rows, in index order.
    pub fn rows(&self) -> impl Iterator<Item = &DisplayRow> {
        self.index.rows()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    pub fn summary(&self) -> SummaryCounts {
        self.summary
    }
}
