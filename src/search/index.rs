//! Precomputed search index over display rows.

use crate::model::DisplayRow;
use crate::text::normalize;

/// Separator between row fields inside a haystack.
const FIELD_SEPARATOR: &str = " | ";

/// One row together with its precomputed, normalized search text.
#[derive(Debug, Clone)]
pub struct SearchIndexEntry {
    pub row: DisplayRow,
    /// Normalized concatenation of the row's display fields; built once at
    /// index time so per-keystroke filtering never re-normalizes.
    pub haystack: String,
}

/// Immutable search index over a row collection.
///
/// Built wholesale from the sorted rows of one catalog load and never
/// mutated afterward; a catalog reload builds a new index and the old one is
/// dropped with its catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchIndexEntry>,
}

impl SearchIndex {
    /// Builds the index, consuming the rows. Entries keep the row order they
    /// were given (the sorter has already run).
    pub fn build(rows: Vec<DisplayRow>) -> Self {
        let start = std::time::Instant::now();
        let entries: Vec<SearchIndexEntry> = rows
            .into_iter()
            .map(|row| SearchIndexEntry {
                haystack: haystack_for(&row),
                row,
            })
            .collect();

        tracing::info!(
            "Built search index: {} entries in {:?}",
            entries.len(),
            start.elapsed()
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchIndexEntry> {
        self.entries.iter()
    }

    /// The underlying rows, in index order.
    pub fn rows(&self) -> impl Iterator<Item = &DisplayRow> {
        self.entries.iter().map(|e| &e.row)
    }
}

/// Concatenates the row's display fields (order fixed: title, option, price,
/// description, full label) and normalizes the result.
fn haystack_for(row: &DisplayRow) -> String {
    let joined = [
        row.service_title.as_str(),
        row.option.as_str(),
        row.price_label.as_str(),
        row.service_desc.as_str(),
        row.full_label.as_str(),
    ]
    .join(FIELD_SEPARATOR);
    normalize(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn row() -> DisplayRow {
        DisplayRow {
            service_id: "sede".to_string(),
            service_title: "Clases en Sede".to_string(),
            service_desc: "Música y Danza".to_string(),
            option: "Paquete 4".to_string(),
            price_label: "$ 50.000".to_string(),
            price_cop: Some(50_000),
            full_label: "Sede Paquete 4".to_string(),
        }
    }

    #[test]
    fn haystack_is_normalized_and_complete() {
        let index = SearchIndex::build(vec![row()]);
        let entry = index.iter().next().unwrap();
        check!(entry.haystack == "clases en sede paquete 4 50 000 musica y danza sede paquete 4");
    }

    #[test]
    fn build_preserves_row_order() {
        let mut second = row();
        second.option = "Individual".to_string();
        let index = SearchIndex::build(vec![row(), second]);
        let options: Vec<_> = index.rows().map(|r| r.option.as_str()).collect();
        check!(options == ["Paquete 4", "Individual"]);
    }
}
