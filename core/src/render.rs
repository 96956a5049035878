//! Renderers consume a finished [`ReportSpec`] read-only.

use std::io;

use crate::report::ReportSpec;

/// Anything that can turn a finished spec into output
pub trait ReportRenderer {
    fn render(&self, spec: &ReportSpec, out: &mut dyn io::Write) -> io::Result<()>;
}

/// Line-oriented, human-readable listing of a spec
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, spec: &ReportSpec, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "=== Report: {} ===", spec.title())?;
        writeln!(out, "Format: {}", spec.format())?;
        writeln!(
            out,
            "Period: {} to {}",
            spec.start_date().format("%Y-%m-%d"),
            spec.end_date().format("%Y-%m-%d")
        )?;

        if let Some(header) = spec.header().active_text() {
            writeln!(out, "Header: {header}")?;
        }
        if let Some(chart) = spec.charts().active_text() {
            writeln!(out, "Chart: {chart}")?;
        }

        writeln!(out, "Columns: {}", spec.columns().join(", "))?;

        if !spec.filters().is_empty() {
            writeln!(out, "Filters: {}", spec.filters().join(", "))?;
        }
        if let Some(sort_by) = spec.sort_by() {
            writeln!(out, "Sorted by: {sort_by}")?;
        }
        if let Some(group_by) = spec.group_by() {
            writeln!(out, "Grouped by: {group_by}")?;
        }
        if spec.include_summary() {
            writeln!(out, "Summary: included")?;
        }
        if spec.include_totals() {
            writeln!(out, "Totals: included")?;
        }
        if let Some(layout) = describe_layout(spec) {
            writeln!(out, "Layout: {layout}")?;
        }
        if let Some(logo) = spec.company_logo() {
            writeln!(out, "Logo: {logo}")?;
        }
        if let Some(watermark) = spec.watermark() {
            writeln!(out, "Watermark: {watermark}")?;
        }
        if let Some(footer) = spec.footer().active_text() {
            writeln!(out, "Footer: {footer}")?;
        }

        writeln!(out, "Report generated successfully!")
    }
}

fn describe_layout(spec: &ReportSpec) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(orientation) = spec.orientation() {
        parts.push(orientation.to_string());
    }
    if let Some(page_size) = spec.page_size() {
        parts.push(page_size.to_string());
    }
    if spec.include_page_numbers() {
        parts.push("page numbers".to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Pretty-printed JSON of the whole spec
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, spec: &ReportSpec, out: &mut dyn io::Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, spec)?;
        writeln!(out)
    }
}
