//! Core logic for turning pasted work-group reports into structured records.
//! The parser is pure; the binder is the only part that touches the disk.

pub mod binder;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod period;
pub mod report;

pub use binder::{
    resolve_zip_path, ArchiveEntry, ArchiveSource, BindError, BindResult, DocumentationBinder,
    MemoryArchive, ZipArchiveSource,
};
pub use config::{ConfigError, ReportConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::documentation::{DisplaySize, ImageRef};
pub use model::work_group::WorkGroup;
pub use parser::dialect::Dialect;
pub use parser::{parse, parse_report, ParsedReport};
pub use period::{extract_period, ReportPeriod, PERIOD_PLACEHOLDER};
pub use report::ReportContext;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
