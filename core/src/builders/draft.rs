//! Mutable accumulator behind every builder stage.

use chrono::NaiveDate;

use crate::error::ReportError;
use crate::error::Result;
use crate::report::PageLayout;
use crate::report::ReportPeriod;
use crate::report::ReportSpec;
use crate::report::Section;
use crate::types::ReportFormat;
use crate::types::is_blank;

/// Everything collected so far. No cross-field checks happen here until
/// [`ReportDraft::finalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ReportDraft {
    pub title: Option<String>,
    pub format: Option<ReportFormat>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub header: Section,
    pub footer: Section,
    pub charts: Section,
    pub include_summary: bool,
    pub columns: Vec<String>,
    pub filters: Vec<String>,
    pub sort_by: Option<String>,
    pub group_by: Option<String>,
    pub include_totals: bool,
    pub layout: PageLayout,
    pub company_logo: Option<String>,
    pub watermark: Option<String>,
}

impl ReportDraft {
    /// Validate in a fixed order and copy the state into a [`ReportSpec`].
    ///
    /// The first failing check wins. The draft itself is never modified.
    pub fn finalize(&self) -> Result<ReportSpec> {
        let title = self
            .title
            .clone()
            .ok_or(ReportError::MissingField { field: "title" })?;
        let format = self
            .format
            .ok_or(ReportError::MissingField { field: "format" })?;
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ReportError::MissingField { field: "period" }),
        };
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        if self.columns.is_empty() {
            return Err(ReportError::MissingField { field: "columns" });
        }
        check_section(&self.header, "headerText")?;
        check_section(&self.footer, "footerText")?;
        check_section(&self.charts, "chartType")?;

        Ok(ReportSpec {
            title,
            format,
            period: ReportPeriod::new(start, end),
            header: self.header.clone(),
            footer: self.footer.clone(),
            charts: self.charts.clone(),
            include_summary: self.include_summary,
            columns: self.columns.clone().into_boxed_slice(),
            filters: self.filters.clone().into_boxed_slice(),
            sort_by: self.sort_by.clone(),
            group_by: self.group_by.clone(),
            include_totals: self.include_totals,
            layout: self.layout,
            company_logo: self.company_logo.clone(),
            watermark: self.watermark.clone(),
        })
    }
}

fn check_section(section: &Section, field: &'static str) -> Result<()> {
    if section.enabled && is_blank(section.text.as_deref()) {
        return Err(ReportError::MissingField { field });
    }
    Ok(())
}
