//! Category names.
//!
//! Categories are free text on each transaction; this module only provides
//! the default set offered by the forms and the normalization used to merge
//! spelling variants.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Categories always offered, even before any transaction uses them.
pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "Groceries",
    "Housing",
    "Transportation",
    "Dining Out",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Other",
    "Salary",
    "Freelance",
    "Investment Returns",
];

/// Collapse inner whitespace and trim. `None` when blank.
pub fn normalize_category_display(input: &str) -> Option<String> {
    let mut out = String::new();
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Comparison key: accents stripped, lowercase, punctuation folded to single
/// spaces. `None` when nothing alphanumeric is left.
pub fn normalize_category_key(input: &str) -> Option<String> {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in input.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim_end();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

/// Union of the used categories and [`DEFAULT_CATEGORIES`], de-duplicated by
/// key (first spelling wins, used categories first) and sorted by key.
pub fn merge_categories<I, S>(used: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<(String, String)> = Vec::new();
    let used = used
        .into_iter()
        .filter_map(|name| normalize_category_display(name.as_ref()));
    let defaults = DEFAULT_CATEGORIES.iter().map(|name| (*name).to_string());

    for display in used.chain(defaults) {
        let Some(key) = normalize_category_key(&display) else {
            continue;
        };
        if merged.iter().any(|(existing, _)| *existing == key) {
            continue;
        }
        merged.push((key, display));
    }

    merged.sort_by(|a, b| a.0.cmp(&b.0));
    merged.into_iter().map(|(_, display)| display).collect()
}
