//! Free-text work report parser.
//!
//! # Responsibility
//! - Segment pasted report text into work-group chunks.
//! - Derive group names and route each chunk to its dialect pipeline.
//! - Assemble retained groups in source order.
//!
//! # Invariants
//! - Parsing is pure: no I/O besides diagnostic logging, no shared mutable state.
//! - Malformed fragments are dropped, never reported as errors.
//! - Only text after a `<n>. group` delimiter forms a group; leading
//!   preamble text is ignored.
//! - Groups with zero surviving tasks are dropped from the output.

pub mod civil;
pub mod dialect;
pub mod generic;
pub mod text;

use crate::model::work_group::WorkGroup;
use crate::period::{extract_period, ReportPeriod};
use dialect::Dialect;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use text::title_case;

static GROUP_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+\.\s*group").expect("valid group delimiter regex"));
static GROUP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^=]+").expect("valid group name regex"));

/// Groups and period parsed from one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub groups: Vec<WorkGroup>,
    pub period: ReportPeriod,
}

/// Parses raw report text into ordered work groups.
///
/// Never fails; unrecognized input yields fewer (or zero) groups.
pub fn parse(raw_text: &str) -> Vec<WorkGroup> {
    GROUP_DELIMITER_RE
        .split(raw_text.trim())
        .skip(1)
        .enumerate()
        .filter_map(|(index, chunk)| parse_chunk(index + 1, chunk))
        .collect()
}

/// Parses groups and the reporting period in one call.
pub fn parse_report(raw_text: &str) -> ParsedReport {
    let groups = parse(raw_text);
    let period = extract_period(raw_text);
    info!(
        "event=parse_done module=parser status=ok groups={} tasks={} period_found={}",
        groups.len(),
        groups.iter().map(|group| group.tasks.len()).sum::<usize>(),
        period.is_found()
    );
    ParsedReport { groups, period }
}

/// Derives the title-cased group name from the start of a chunk.
///
/// Returns `None` when the chunk starts with `=` or the name is blank.
pub fn group_name(chunk: &str) -> Option<String> {
    let raw = GROUP_NAME_RE.find(chunk)?.as_str().trim();
    if raw.is_empty() {
        return None;
    }
    Some(title_case(raw))
}

fn parse_chunk(ordinal: usize, chunk: &str) -> Option<WorkGroup> {
    if chunk.trim().is_empty() {
        return None;
    }

    let name = group_name(chunk)?;
    let dialect = Dialect::detect(&name);
    let tasks = dialect.extract_tasks(chunk);
    if tasks.is_empty() {
        // Callers only see the shorter list; keep a trace of what vanished.
        debug!("{}", dropped_group_event(ordinal, dialect, &name));
        return None;
    }

    Some(WorkGroup::new(name, tasks))
}

/// Metadata-only log line for a dropped group; the name itself is pasted text.
fn dropped_group_event(ordinal: usize, dialect: Dialect, name: &str) -> String {
    format!(
        "event=group_dropped module=parser reason=no_tasks dialect={} group_index={} name_chars={}",
        dialect.as_str(),
        ordinal,
        name.chars().count()
    )
}
