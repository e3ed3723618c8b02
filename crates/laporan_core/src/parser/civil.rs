//! Civil-works dialect: lettered sub-items with worker-count annotations.
//!
//! # Responsibility
//! - Locate the task block after `Adapun pekerjaan yang dikerjakan ... adalah =`.
//! - Turn each `(A).`, `(B).` item into one normalized task sentence.
//!
//! # Invariants
//! - Every emitted task ends with `.`; counted tasks end with
//!   ` (dikerjakan oleh <N> orang).`.
//! - Normalizing an already emitted task yields the same string.

use crate::parser::text::{capitalize, strip_commas_and_periods};
use once_cell::sync::Lazy;
use regex::Regex;

static TASK_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Adapun pekerjaan yang dikerjakan.*?adalah\s*=(.*)")
        .expect("valid civil task block regex")
});
static LETTER_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*[A-Z]\s*\)\.?").expect("valid letter marker regex"));
static WORKER_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\(jumlah pekerja (\d+) orang\)").expect("valid worker count regex")
});
static WORKER_ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\(jumlah pekerja.*?\)").expect("valid worker annotation regex")
});
// `.` stops at a newline, so only the rest of the current line is dropped.
static SCHEDULE_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)schedule.*").expect("valid schedule suffix regex"));

/// Extracts civil-dialect tasks from one group chunk.
///
/// Returns an empty list when the chunk has no task block.
pub fn extract_tasks(chunk: &str) -> Vec<String> {
    let Some(block) = task_block(chunk) else {
        return Vec::new();
    };

    LETTER_MARKER_RE
        .split(block)
        .filter_map(normalize_item)
        .collect()
}

/// Normalizes one lettered item into a task sentence.
///
/// Returns `None` for items that carry no description.
pub fn normalize_item(item: &str) -> Option<String> {
    if item.trim().is_empty() {
        return None;
    }

    let worker_count = WORKER_COUNT_RE
        .captures(item)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let without_count = WORKER_ANNOTATION_RE.replace_all(item, "");
    let without_schedule = SCHEDULE_SUFFIX_RE.replace_all(&without_count, "");
    let stripped = strip_commas_and_periods(&without_schedule);
    let description = capitalize(stripped.trim());
    if description.is_empty() {
        return None;
    }

    Some(match worker_count {
        Some(count) => format!("{description} (dikerjakan oleh {count} orang)."),
        None => format!("{description}."),
    })
}

fn task_block(chunk: &str) -> Option<&str> {
    TASK_BLOCK_RE
        .captures(chunk)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
