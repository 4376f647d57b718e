//! Text normalization shared by indexing, query tokenization and highlighting.
//!
//! Index haystacks and query tokens pass through the same [`normalize`] path,
//! which is what guarantees accent- and case-insensitive matching: both sides
//! are reduced to the same alphabet before any comparison happens.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes text for matching: NFD-decomposes, strips combining marks,
/// lowercases, and maps every run of non-alphanumeric characters to a single
/// space. The result is trimmed and contains only lowercase letters, digits
/// and single spaces.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        } else {
            // Whitespace and punctuation runs both collapse to one space.
            pending_space = true;
        }
    }

    out
}

/// Folds text the way [`normalize`] folds individual characters (lowercase,
/// no combining marks) while keeping a byte-offset map back into the
/// original string.
///
/// Returns the folded string plus, for every folded byte, the half-open byte
/// range of the original character it came from. A match found at folded
/// bytes `[s, e)` covers original bytes `map[s].0 .. map[e - 1].1`.
///
/// Unlike [`normalize`], punctuation and whitespace are folded as-is rather
/// than collapsed, so offsets stay alignable.
pub(crate) fn fold_with_offsets(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut folded = String::with_capacity(text.len());
    let mut map = Vec::with_capacity(text.len());

    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        let before = folded.len();
        folded.extend(
            c.to_lowercase()
                .nfd()
                .filter(|m| !is_combining_mark(*m)),
        );
        for _ in before..folded.len() {
            map.push((start, end));
        }
    }

    (folded, map)
}

/// Folds a string with no offset tracking. Used for the needle side of
/// highlighting, where only the folded form matters.
pub(crate) fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Collapses internal whitespace runs to single spaces and trims.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Música y Danza", "musica y danza")]
    #[case("  SEDE — 24 meses  ", "sede 24 meses")]
    #[case("Teatro/Artes Plásticas", "teatro artes plasticas")]
    #[case("¡Hola!", "hola")]
    #[case("", "")]
    #[case("***", "")]
    fn normalize_examples(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("Música y Danza")]
    #[case("  SEDE — 24 meses  ")]
    #[case("¿Cuánto cuesta? $ 50.000")]
    #[case("")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        check!(normalize(&once) == once);
    }

    #[test]
    fn normalize_output_alphabet() {
        let out = normalize("Señal: ÁÉÍÓÚ, ñ/Ñ — 42%");
        check!(!out.starts_with(' ') && !out.ends_with(' '));
        check!(!out.contains("  "));
        for c in out.chars() {
            check!(c == ' ' || c.is_lowercase() || c.is_ascii_digit(), "unexpected char {c:?}");
        }
    }

    #[test]
    fn fold_preserves_offsets() {
        let (folded, map) = fold_with_offsets("Móvil");
        check!(folded == "movil");
        check!(map.len() == folded.len());
        // 'ó' occupies original bytes 1..3 but folds to a single byte.
        check!(map[1] == (1, 3));
    }

    #[test]
    fn collapse_whitespace_trims_and_joins() {
        check!(collapse_whitespace("  a   b \t c ") == "a b c");
        check!(collapse_whitespace("   ") == "");
    }
}
