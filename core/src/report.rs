//! The finished, immutable report specification.

use std::io;

use chrono::NaiveDate;
use serde::Serialize;

use crate::builders::Init;
use crate::builders::ReportSpecBuilder;
use crate::render::ReportRenderer;
use crate::types::Orientation;
use crate::types::PageSize;
use crate::types::ReportFormat;

/// An optional report section that is either switched off or carries text.
///
/// Used for the header, the footer and the chart (where the text is the
/// chart type).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub enabled: bool,
    pub text: Option<String>,
}

impl Section {
    pub(crate) fn enable(&mut self, text: String) {
        self.enabled = true;
        self.text = Some(text);
    }

    /// Text of the section, only when the section is enabled
    pub fn active_text(&self) -> Option<&str> {
        if self.enabled {
            self.text.as_deref()
        } else {
            None
        }
    }
}

/// Page layout settings, always replaced as a whole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub orientation: Option<Orientation>,
    pub page_size: Option<PageSize>,
    pub page_numbers: bool,
}

/// Inclusive date range a report covers. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    pub(crate) const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Fully validated report specification.
///
/// Only [`ReportSpecBuilder::build`] creates values of this type, so title,
/// format and period are always present, the period is ordered and there is
/// at least one column. Nothing is shared with the builder that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSpec {
    pub(crate) title: String,
    pub(crate) format: ReportFormat,
    pub(crate) period: ReportPeriod,
    pub(crate) header: Section,
    pub(crate) footer: Section,
    pub(crate) charts: Section,
    pub(crate) include_summary: bool,
    pub(crate) columns: Box<[String]>,
    pub(crate) filters: Box<[String]>,
    pub(crate) sort_by: Option<String>,
    pub(crate) group_by: Option<String>,
    pub(crate) include_totals: bool,
    pub(crate) layout: PageLayout,
    pub(crate) company_logo: Option<String>,
    pub(crate) watermark: Option<String>,
}

impl ReportSpec {
    /// Start a new staged builder
    pub fn builder() -> ReportSpecBuilder<Init> {
        ReportSpecBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn format(&self) -> ReportFormat {
        self.format
    }

    pub const fn period(&self) -> ReportPeriod {
        self.period
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.period.start
    }

    pub const fn end_date(&self) -> NaiveDate {
        self.period.end
    }

    pub const fn header(&self) -> &Section {
        &self.header
    }

    pub const fn include_header(&self) -> bool {
        self.header.enabled
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header.text.as_deref()
    }

    pub const fn footer(&self) -> &Section {
        &self.footer
    }

    pub const fn include_footer(&self) -> bool {
        self.footer.enabled
    }

    pub fn footer_text(&self) -> Option<&str> {
        self.footer.text.as_deref()
    }

    pub const fn charts(&self) -> &Section {
        &self.charts
    }

    pub const fn include_charts(&self) -> bool {
        self.charts.enabled
    }

    pub fn chart_type(&self) -> Option<&str> {
        self.charts.text.as_deref()
    }

    pub const fn include_summary(&self) -> bool {
        self.include_summary
    }

    /// Columns in insertion order; never empty
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Filter expressions in insertion order
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn group_by(&self) -> Option<&str> {
        self.group_by.as_deref()
    }

    pub const fn include_totals(&self) -> bool {
        self.include_totals
    }

    pub const fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub const fn orientation(&self) -> Option<Orientation> {
        self.layout.orientation
    }

    pub const fn page_size(&self) -> Option<PageSize> {
        self.layout.page_size
    }

    pub const fn include_page_numbers(&self) -> bool {
        self.layout.page_numbers
    }

    pub fn company_logo(&self) -> Option<&str> {
        self.company_logo.as_deref()
    }

    pub fn watermark(&self) -> Option<&str> {
        self.watermark.as_deref()
    }

    /// Hand this spec to a renderer
    pub fn render<R>(&self, renderer: &R, out: &mut dyn io::Write) -> io::Result<()>
    where
        R: ReportRenderer + ?Sized,
    {
        renderer.render(self, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_days() {
        let january = ReportPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(january.num_days(), 31);
        assert!(january.contains(date(2024, 1, 15)));
        assert!(!january.contains(date(2024, 2, 1)));

        let single = ReportPeriod::new(date(2024, 2, 29), date(2024, 2, 29));
        assert_eq!(single.num_days(), 1);
    }

    #[test]
    fn test_section_active_text() {
        let mut section = Section::default();
        assert_eq!(section.active_text(), None);

        section.enable("Confidential".to_string());
        assert_eq!(section.active_text(), Some("Confidential"));

        let disabled = Section {
            enabled: false,
            text: Some("ignored".to_string()),
        };
        assert_eq!(disabled.active_text(), None);
    }

    #[test]
    fn test_spec_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportSpec>();
    }
}
