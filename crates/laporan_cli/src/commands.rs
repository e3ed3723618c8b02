//! Subcommand bodies, kept out of `main` so they can be unit tested.

use anyhow::{bail, Context, Result};
use laporan_core::{
    parse_report, resolve_zip_path, DocumentationBinder, ReportConfig, ReportContext,
    ZipArchiveSource,
};
use log::{info, warn};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Explicit `group name -> archive path` pairs from `--archive`.
pub type ArchiveMapping = Vec<(String, PathBuf)>;

/// Reads the report from `input` or stdin with line endings normalized to `\n`.
pub fn read_report(input: Option<&Path>) -> Result<String> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report `{}`", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read report from stdin")?;
            buffer
        }
    };
    Ok(raw.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Human-readable summary of a parsed report.
pub fn render_text(raw: &str) -> String {
    let report = parse_report(raw);
    let mut output = String::new();

    output.push_str(&format!("Periode: {}\n", report.period));
    output.push_str(&format!("Grup pekerjaan: {}\n", report.groups.len()));
    for (index, group) in report.groups.iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n", index + 1, group.name));
        for task in &group.tasks {
            output.push_str(&format!("   - {task}\n"));
        }
    }
    output
}

/// Render context of a parsed report as pretty JSON, without documentation.
pub fn render_json(raw: &str, config: &ReportConfig) -> Result<String> {
    let report = parse_report(raw);
    let context = ReportContext::new(config.company_name.as_str(), report.period, report.groups);
    Ok(context.to_json_pretty()?)
}

/// Parses `NAME=PATH` pairs; the `.zip` extension is optional.
pub fn parse_archive_mapping(values: &[String]) -> Result<ArchiveMapping> {
    values
        .iter()
        .map(|value| {
            let Some((name, path)) = value.split_once('=') else {
                bail!("invalid --archive `{value}`; expected `GROUP NAME=path.zip`");
            };
            let (name, path) = (name.trim(), path.trim());
            if name.is_empty() || path.is_empty() {
                bail!("invalid --archive `{value}`; group name and path are required");
            }
            Ok((name.to_string(), resolve_zip_path(path)))
        })
        .collect()
}

/// Parses, binds archives per group and writes the render-context JSON.
///
/// Returns the path written.
pub fn build(
    raw: &str,
    config: &ReportConfig,
    mapping: &ArchiveMapping,
    archive_dir: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let report = parse_report(raw);
    let mut groups = report.groups;
    if groups.is_empty() {
        println!("Tidak ada data pekerjaan yang bisa diproses.");
    } else {
        let binder = DocumentationBinder::prepare(&config.extraction_root).with_context(|| {
            format!(
                "failed to prepare extraction folder `{}`",
                config.extraction_root.display()
            )
        })?;

        for group in &mut groups {
            let Some(path) = archive_for(&group.name, mapping, archive_dir) else {
                warn!("event=archive_missing module=cli status=warn group={}", group.name);
                continue;
            };
            let mut source = ZipArchiveSource::open(&path)
                .with_context(|| format!("failed to open archive `{}`", path.display()))?;
            let attached = binder
                .bind_group(group, &mut source)
                .with_context(|| format!("failed to extract `{}`", path.display()))?;
            info!(
                "event=group_bound module=cli status=ok group={} images={}",
                group.name, attached
            );
        }
    }

    let context = ReportContext::new(config.company_name.as_str(), report.period, groups);
    let output = output
        .unwrap_or_else(|| PathBuf::from(format!("{}.json", context.output_file_name())));
    std::fs::write(&output, context.to_json_pretty()?)
        .with_context(|| format!("failed to write `{}`", output.display()))?;
    Ok(output)
}

/// Explicit mapping wins (case-insensitive name match); otherwise
/// `<archive_dir>/<Group_Name>.zip` when that file exists.
fn archive_for(
    group_name: &str,
    mapping: &ArchiveMapping,
    archive_dir: Option<&Path>,
) -> Option<PathBuf> {
    let wanted = group_name.to_lowercase();
    if let Some((_, path)) = mapping
        .iter()
        .find(|(name, _)| name.to_lowercase() == wanted)
    {
        return Some(path.clone());
    }

    let candidate = archive_dir?.join(resolve_zip_path(&group_name.replace(' ', "_")));
    candidate.exists().then_some(candidate)
}
