//! Dialect selection for one group chunk.

use crate::parser::{civil, generic};

/// Input sub-format of a group chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Civil-works reports with `(A).` lettered items.
    Civil,
    /// Everything else; `1.(Label)` numbered items.
    Generic,
}

impl Dialect {
    /// Picks the dialect from a derived group name.
    pub fn detect(group_name: &str) -> Self {
        if group_name.to_lowercase().contains("sipil") {
            Self::Civil
        } else {
            Self::Generic
        }
    }

    /// Runs this dialect's extraction pipeline over a group chunk.
    pub fn extract_tasks(self, chunk: &str) -> Vec<String> {
        match self {
            Self::Civil => civil::extract_tasks(chunk),
            Self::Generic => generic::extract_tasks(chunk),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Civil => "civil",
            Self::Generic => "generic",
        }
    }
}
