//! Render context handed to the external document template renderer.

use crate::model::work_group::WorkGroup;
use crate::period::ReportPeriod;
use serde::Serialize;

const OUTPUT_FILE_PREFIX: &str = "Laporan Kerja ZIP";
const OUTPUT_FILE_EXTENSION: &str = "docx";

/// Everything the template needs to render one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    pub company_name: String,
    /// Serialized as its display string (placeholder when not found).
    pub report_period: ReportPeriod,
    pub work_groups: Vec<WorkGroup>,
}

impl ReportContext {
    pub fn new(
        company_name: impl Into<String>,
        report_period: ReportPeriod,
        work_groups: Vec<WorkGroup>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            report_period,
            work_groups,
        }
    }

    /// File name for the rendered document, e.g.
    /// `Laporan Kerja ZIP 10 - 16 Januari 2024.docx`.
    ///
    /// Path separators in the period are replaced by `-`.
    pub fn output_file_name(&self) -> String {
        let period = self.report_period.as_str().replace(['/', '\\'], "-");
        format!("{OUTPUT_FILE_PREFIX} {period}.{OUTPUT_FILE_EXTENSION}")
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_empty(&self) -> bool {
        self.work_groups.is_empty()
    }
}
