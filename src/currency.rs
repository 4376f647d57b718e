//! Parsing and formatting of Colombian peso amounts.
//!
//! Amounts are whole currency units (no decimals, no sign). Formatting
//! follows the es-CO convention: `.` as the thousands separator, prefixed
//! with `$ `.

/// Parses an amount out of a human price label by stripping every non-digit
/// character and reading the remainder as base-10.
///
/// Returns `None` for empty input, input with no digits, or values that do
/// not fit in `i64`.
pub fn parse_amount(label: &str) -> Option<i64> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Formats an amount as an es-CO price label, e.g. `format_amount(50000)`
/// yields `"$ 50.000"`. Pure string construction; never fails.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    let first_group = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("$ {sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("$ 50.000", Some(50_000))]
    #[case("50000", Some(50_000))]
    #[case("COP 1.234.567", Some(1_234_567))]
    #[case("$ 0", Some(0))]
    #[case("", None)]
    #[case("sin precio", None)]
    fn parse_amount_cases(#[case] label: &str, #[case] expected: Option<i64>) {
        check!(parse_amount(label) == expected);
    }

    #[rstest]
    #[case(0, "$ 0")]
    #[case(950, "$ 950")]
    #[case(50_000, "$ 50.000")]
    #[case(1_234_567, "$ 1.234.567")]
    #[case(100, "$ 100")]
    #[case(1_000, "$ 1.000")]
    fn format_amount_cases(#[case] amount: i64, #[case] expected: &str) {
        check!(format_amount(amount) == expected);
    }

    #[test]
    fn round_trip() {
        for n in [0, 1, 99, 100, 999, 1_000, 10_000, 50_000, 999_999, 1_000_000, 123_456_789] {
            check!(parse_amount(&format_amount(n)) == Some(n));
        }
    }
}
