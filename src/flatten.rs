//! Joins price entries with their services into flat display rows.

use crate::classify::classify;
use crate::currency::{format_amount, parse_amount};
use crate::model::{DisplayRow, OPTION_PLACEHOLDER, PriceEntry, ServiceDefinition};
use crate::text::collapse_whitespace;

/// Flattens price entries into one [`DisplayRow`] each.
///
/// Every row gets a service association: unmatched labels go to the
/// synthesized fallback service rather than being dropped. The `option`
/// sub-label is the entry label with the matched pattern removed; a label
/// fully consumed by its pattern falls back to [`OPTION_PLACEHOLDER`].
///
/// Output order is unspecified; [`crate::sort::sort_rows`] owns ordering.
pub fn flatten(services: &[ServiceDefinition], entries: &[PriceEntry]) -> Vec<DisplayRow> {
    let fallback = ServiceDefinition::fallback();
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        let svc = classify(&entry.service_label, services).unwrap_or(&fallback);

        let option = collapse_whitespace(&svc.rule.strip_first(&entry.service_label));
        let option = if option.is_empty() {
            OPTION_PLACEHOLDER.to_string()
        } else {
            option
        };

        let price_label = if entry.price_label.is_empty() {
            entry.price_cop.map(format_amount).unwrap_or_default()
        } else {
            entry.price_label.clone()
        };

        rows.push(DisplayRow {
            service_id: svc.id.clone(),
            service_title: svc.title.clone(),
            service_desc: svc.description.clone(),
            price_cop: entry.price_cop.or_else(|| parse_amount(&price_label)),
            option,
            price_label,
            full_label: entry.service_label.clone(),
        });
    }

    rows
}
