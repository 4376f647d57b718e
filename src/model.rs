//! Core data types for the catalog pipeline.
//!
//! Raw document shapes are coerced defensively: a malformed element drops
//! out of its collection instead of failing the load, and scalar fields
//! tolerate the usual JSON sloppiness (numbers where strings were meant).

use serde::Deserialize;
use serde_json::Value;

use crate::classify::MatchRule;
use crate::currency::parse_amount;

/// Reserved service id for price entries no declared pattern matches.
pub const FALLBACK_SERVICE_ID: &str = "otros";

/// Display title of the fallback service.
pub const FALLBACK_SERVICE_TITLE: &str = "Otros";

/// Description shown for fallback rows.
pub const FALLBACK_SERVICE_DESC: &str = "Servicios no clasificados (verificar nombre exacto).";

/// Option text used when stripping the service pattern leaves nothing.
pub const OPTION_PLACEHOLDER: &str = "Tarifa";

/// A declared service category with its label-matching rule.
///
/// The position of a definition inside the catalog's service list is its
/// classification priority: earlier definitions win ties (see
/// [`crate::classify::classify`]).
#[derive(Debug, Clone)]
pub struct ServiceDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub rule: MatchRule,
}

impl ServiceDefinition {
    /// The synthesized service assigned to price entries no rule matches.
    pub fn fallback() -> Self {
        Self {
            id: FALLBACK_SERVICE_ID.to_string(),
            title: FALLBACK_SERVICE_TITLE.to_string(),
            description: FALLBACK_SERVICE_DESC.to_string(),
            rule: MatchRule::Never,
        }
    }
}

/// One raw tariff line: a free-text label and a price, at least one of
/// label/amount present.
#[derive(Debug, Clone)]
pub struct PriceEntry {
    pub service_label: String,
    pub price_label: String,
    pub price_cop: Option<i64>,
}

/// A price entry resolved to a service, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub service_id: String,
    pub service_title: String,
    pub service_desc: String,
    /// The entry label with the service pattern removed; never empty
    /// ([`OPTION_PLACEHOLDER`] stands in).
    pub option: String,
    pub price_label: String,
    pub price_cop: Option<i64>,
    /// The original, unstripped service label.
    pub full_label: String,
}

/// Top-level shape of the source document. Collections come in as raw
/// values so one bad element cannot fail the surrounding array.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub(crate) meta: Value,
    #[serde(default)]
    pub(crate) note: Value,
    #[serde(default)]
    pub(crate) services: Vec<Value>,
    #[serde(default)]
    pub(crate) prices: Vec<Value>,
}

impl RawDocument {
    /// First present of `meta.last_updated` / `meta.updated_at` /
    /// `meta.updatedAt`, trimmed.
    pub(crate) fn updated_at(&self) -> Option<String> {
        ["last_updated", "updated_at", "updatedAt"]
            .iter()
            .filter_map(|key| coerce_string(self.meta.get(*key)?))
            .find(|s| !s.is_empty())
    }
}

/// Coerces a JSON scalar to a trimmed string: strings pass through, numbers
/// are stringified, everything else is rejected.
pub(crate) fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn field_string(value: &Value, key: &str) -> String {
    value.get(key).and_then(coerce_string).unwrap_or_default()
}

/// Builds a [`ServiceDefinition`] from one raw `services` element.
///
/// Returns `None` when `id` or `title` is missing, which drops the element.
/// An invalid `match` pattern does not drop it: the rule degrades to
/// [`MatchRule::Never`] so the service still appears with zero rows.
pub(crate) fn service_from_value(value: &Value) -> Option<ServiceDefinition> {
    let id = field_string(value, "id");
    let title = field_string(value, "title");
    if id.is_empty() || title.is_empty() {
        tracing::warn!("dropping service entry without id/title: {value}");
        return None;
    }
    Some(ServiceDefinition {
        rule: MatchRule::compile(&field_string(value, "match")),
        description: field_string(value, "desc"),
        id,
        title,
    })
}

/// Builds a [`PriceEntry`] from one raw `prices` element.
///
/// `price_cop` must be a JSON number; anything else is treated as absent and
/// re-derived from the price label. Entries with no service label, or with
/// neither a price label nor a derivable amount, are dropped.
pub(crate) fn price_from_value(value: &Value) -> Option<PriceEntry> {
    let service_label = field_string(value, "service_label");
    let price_label = field_string(value, "price_label");
    let price_cop = value
        .get("price_cop")
        .and_then(Value::as_f64)
        .map(|n| n as i64)
        .or_else(|| parse_amount(&price_label));

    if service_label.is_empty() || (price_label.is_empty() && price_cop.is_none()) {
        tracing::warn!("dropping malformed price entry: {value}");
        return None;
    }
    Some(PriceEntry {
        service_label,
        price_label,
        price_cop,
    })
}
