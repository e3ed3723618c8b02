//! Reporting period extraction.
//!
//! # Invariants
//! - A missing period is `ReportPeriod::NotFound`, never an empty string.
//! - A found period is the matched date range, verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Display text used when the report names no period.
pub const PERIOD_PLACEHOLDER: &str = "Periode Tidak Ditemukan";

static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)periode.*?(\d{1,2}\s*-\s*\d{1,2}\s*\w+\s*\d{4})")
        .expect("valid period regex")
});

/// Reporting date range of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportPeriod {
    Found(String),
    NotFound,
}

impl ReportPeriod {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the matched range, or `None` when nothing matched.
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::Found(value) => Some(value.as_str()),
            Self::NotFound => None,
        }
    }

    /// Returns the display string, substituting the placeholder on a miss.
    pub fn as_str(&self) -> &str {
        self.found().unwrap_or(PERIOD_PLACEHOLDER)
    }
}

impl Display for ReportPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Finds `periode ... <d>-<d> <month> <year>` anywhere in the text.
///
/// The gap after `periode` does not cross line breaks.
pub fn extract_period(raw_text: &str) -> ReportPeriod {
    PERIOD_RE
        .captures(raw_text)
        .and_then(|caps| caps.get(1))
        .map(|m| ReportPeriod::Found(m.as_str().to_string()))
        .unwrap_or(ReportPeriod::NotFound)
}
