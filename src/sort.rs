//! Row ordering: declared service order, then a domain tie-break that puts
//! individual rates before packages, packages before numbered programs, and
//! everything else alphabetically.

use std::cmp::Ordering;
use std::sync::LazyLock;

use ahash::AHashMap;
use regex::Regex;

use crate::model::{DisplayRow, ServiceDefinition};
use crate::text::normalize;

/// Rows whose service id is not declared (the fallback bucket) sort last.
const UNDECLARED_POSITION: usize = usize::MAX;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3})").expect("digit-run pattern is valid"));

/// Sorts rows in place: primary key is the service's position in the
/// declaration order, secondary key is [`compare_options`]. Stable.
pub fn sort_rows(rows: &mut [DisplayRow], services: &[ServiceDefinition]) {
    let order: AHashMap<&str, usize> = services
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();
    let position = |row: &DisplayRow| {
        order
            .get(row.service_id.as_str())
            .copied()
            .unwrap_or(UNDECLARED_POSITION)
    };

    rows.sort_by(|a, b| {
        position(a)
            .cmp(&position(b))
            .then_with(|| compare_options(&a.option, &b.option))
    });
}

/// Compares two option sub-labels:
/// 1. priority bucket ("individual" < "paquete"/"package" < has-digit < rest),
/// 2. first 1–3-digit run, numerically, when both sides have one,
/// 3. accent/case-insensitive lexical order, raw order as the last resort.
///
/// The lexical step compares [`normalize`]d strings, an approximation of
/// Spanish collation without an ICU dependency.
pub fn compare_options(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    priority(&a_lower)
        .cmp(&priority(&b_lower))
        .then_with(
            || match (extract_number(&a_lower), extract_number(&b_lower)) {
                (Some(na), Some(nb)) => na.cmp(&nb),
                _ => Ordering::Equal,
            },
        )
        .then_with(|| normalize(a).cmp(&normalize(b)))
        .then_with(|| a.cmp(b))
}

/// Priority bucket of a lowercased option. Lower sorts first.
fn priority(option: &str) -> u8 {
    if option.contains("individual") {
        0
    } else if option.contains("paquete") || option.contains("package") {
        1
    } else if option.bytes().any(|b| b.is_ascii_digit()) {
        2
    } else {
        3
    }
}

/// First run of 1–3 digits in the string, if any.
fn extract_number(option: &str) -> Option<u32> {
    DIGIT_RUN.find(option).and_then(|m| m.as_str().parse().ok())
}
