//! Generic dialect: numbered parenthetical items such as `1.(Excavator) ...`.

use crate::parser::text::capitalize;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\(").expect("valid numbered item regex"));
static DESCRIPTION_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is).*?pekerjaan.*?=").expect("valid description prefix regex")
});

/// Extracts generic-dialect tasks from one group chunk.
pub fn extract_tasks(chunk: &str) -> Vec<String> {
    NUMBERED_ITEM_RE
        .split(chunk)
        .filter_map(normalize_fragment)
        .collect()
}

/// Turns one fragment into `(<label>): <description>` or a bare description.
///
/// Fragments without a `(` or without the word `pekerjaan` are residual text
/// and yield `None`, as do fragments whose description is empty.
pub fn normalize_fragment(fragment: &str) -> Option<String> {
    if !fragment.contains('(') || !fragment.to_lowercase().contains("pekerjaan") {
        return None;
    }

    let body = DESCRIPTION_PREFIX_RE.replacen(fragment, 1, "");
    let description = capitalize(body.replace(')', "").trim());
    if description.is_empty() {
        return None;
    }

    match label(fragment) {
        Some(label) => Some(format!("({label}): {description}")),
        None => Some(description),
    }
}

fn label(fragment: &str) -> Option<&str> {
    fragment
        .find(')')
        .map(|end| fragment[..end].trim())
        .filter(|label| !label.is_empty())
}
