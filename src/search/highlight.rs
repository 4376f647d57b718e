//! Marks query matches inside raw display text.
//!
//! Filtering happens in normalized space but rendering keeps the original
//! text, diacritics included. To keep the two consistent, matching folds
//! both sides (lowercase, no combining marks), locates spans in the folded
//! haystack, then maps them back to byte offsets in the original string. A
//! query typed without accents still marks the accented display text.

use crate::text::{fold, fold_with_offsets};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Wraps every case/accent-insensitive occurrence of the trimmed query in
/// `<mark>` tags. The query is always treated as literal text, never as a
/// pattern. An empty or whitespace-only query returns `text` unchanged.
pub fn highlight(text: &str, raw_query: &str) -> String {
    let needle = fold(raw_query.trim());
    if needle.is_empty() {
        return text.to_string();
    }

    let (folded, offsets) = fold_with_offsets(text);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, matched) in folded.match_indices(&needle) {
        let orig_start = offsets[start].0;
        let orig_end = offsets[start + matched.len() - 1].1;
        // Folding can merge case variants; skip a match that would rewind
        // into an already-emitted span.
        if orig_start < cursor {
            continue;
        }
        out.push_str(&text[cursor..orig_start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[orig_start..orig_end]);
        out.push_str(MARK_CLOSE);
        cursor = orig_end;
    }
    out.push_str(&text[cursor..]);
    out
}
