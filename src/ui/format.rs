//! Shared text formatting helpers for view models.
//!
//! Small pure functions the view-model layer composes onto listing cards:
//! description truncation, author initials, Cameroon phone-number grouping,
//! and search-match highlight ranges.

/// Default trail appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Truncates `value` to at most `limit` characters, appending `trail`.
///
/// Text within the limit is returned unchanged; otherwise the prefix is
/// trimmed of trailing whitespace before the trail is appended, so a cut at
/// a word boundary never yields `"word ..."`.
#[must_use]
pub fn truncate(value: &str, limit: usize, trail: &str) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    let prefix: String = value.chars().take(limit).collect();
    format!("{}{trail}", prefix.trim_end())
}

/// Returns up to two uppercase initials for a display name.
///
/// One initial per whitespace-separated word, first two words only:
/// `"Marie Kouam"` → `"MK"`, `"Solange"` → `"S"`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Formats a phone number with Cameroon grouping.
///
/// International numbers become `+237 6XX XX XX XX`, nine-digit local
/// numbers starting with 6 become `6XX XX XX XX`. Anything else is returned
/// unchanged — formatting is cosmetic, never validation.
#[must_use]
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if let Some(local) = digits.strip_prefix("237") {
        if local.len() == 9 {
            return format!(
                "+237 {} {} {} {}",
                &local[..3],
                &local[3..5],
                &local[5..7],
                &local[7..]
            );
        }
    }

    if digits.len() == 9 && digits.starts_with('6') {
        return format!(
            "{} {} {} {}",
            &digits[..3],
            &digits[3..5],
            &digits[5..7],
            &digits[7..]
        );
    }

    value.to_string()
}

/// Computes character ranges of `query` occurrences within `text`.
///
/// Matching is case-insensitive; adjacent and overlapping occurrences are
/// merged into single `(start, end)` ranges (exclusive end, character
/// indices). A blank query yields no ranges. The renderer wraps each range
/// in its match-highlight style.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    // Per-character lowercase folding keeps indices aligned with `text`.
    let haystack: Vec<char> = text.chars().map(fold_char).collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();

    if needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for start in 0..=(haystack.len() - needle.len()) {
        if haystack[start..start + needle.len()] == needle[..] {
            let end = start + needle.len();
            match ranges.last_mut() {
                Some((_, prev_end)) if start <= *prev_end => *prev_end = end.max(*prev_end),
                _ => ranges.push((start, end)),
            }
        }
    }

    ranges
}

fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
