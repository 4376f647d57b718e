//! Token-AND filtering of the search index.

use crate::text::normalize;

use super::index::{SearchIndex, SearchIndexEntry};

/// Categorical filter over a row's service id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No categorical restriction.
    #[default]
    All,
    /// Only rows belonging to this service id.
    Service(String),
}

impl CategoryFilter {
    /// Builds a filter from a raw chip/flag value, mapping `"all"` (any
    /// case) and the empty string to [`CategoryFilter::All`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Service(raw.to_string())
        }
    }

    pub fn matches(&self, service_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Service(id) => service_id == id,
        }
    }
}

impl SearchIndex {
    /// Filters the index against a free-text query and a category filter.
    ///
    /// The query is normalized and split on whitespace; an entry survives
    /// iff its service passes the filter and every token is a substring of
    /// its haystack. Zero tokens with [`CategoryFilter::All`] return the
    /// whole index. Entries keep index order; this is a pure function of
    /// (index, query-state) with no caching between calls.
    pub fn search(&self, free_text: &str, filter: &CategoryFilter) -> Vec<&SearchIndexEntry> {
        let normalized = normalize(free_text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        self.iter()
            .filter(|entry| filter.matches(&entry.row.service_id))
            .filter(|entry| tokens.iter().all(|token| entry.haystack.contains(token)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DisplayRow;
    use assert2::check;

    fn row(service_id: &str, option: &str, desc: &str) -> DisplayRow {
        DisplayRow {
            service_id: service_id.to_string(),
            service_title: service_id.to_string(),
            service_desc: desc.to_string(),
            option: option.to_string(),
            price_label: "$ 50.000".to_string(),
            price_cop: Some(50_000),
            full_label: format!("{service_id} {option}"),
        }
    }

    fn index() -> SearchIndex {
        SearchIndex::build(vec![
            row("sede", "Paquete 24", "Música en sede"),
            row("sede", "Individual", "Música en sede"),
            row("hogar", "Paquete 24", "Clases en casa"),
        ])
    }

    #[test]
    fn tokens_are_anded() {
        let index = index();
        let hits = index.search("sede 24", &CategoryFilter::All);
        check!(hits.len() == 1);
        check!(hits[0].row.option == "Paquete 24");
        check!(hits[0].row.service_id == "sede");
    }

    #[test]
    fn empty_query_returns_everything() {
        let index = index();
        check!(index.search("", &CategoryFilter::All).len() == 3);
        check!(index.search("   ", &CategoryFilter::All).len() == 3);
    }

    #[test]
    fn category_filter_restricts_service() {
        let index = index();
        let filter = CategoryFilter::Service("hogar".to_string());
        let hits = index.search("", &filter);
        check!(hits.len() == 1);
        check!(hits[0].row.service_id == "hogar");
    }

    #[test]
    fn query_is_accent_insensitive() {
        let index = index();
        let hits = index.search("musica", &CategoryFilter::All);
        check!(hits.len() == 2);
    }

    #[test]
    fn parse_filter_values() {
        check!(CategoryFilter::parse("all") == CategoryFilter::All);
        check!(CategoryFilter::parse("") == CategoryFilter::All);
        check!(CategoryFilter::parse("sede") == CategoryFilter::Service("sede".to_string()));
    }
}
