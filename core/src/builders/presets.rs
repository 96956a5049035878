//! Ready-made starting points for common report shapes.
//!
//! Each preset takes the mandatory steps for the caller and returns the
//! optional stage, so columns, filters and the rest can still be added.

use chrono::NaiveDate;

use super::OptionalStage;
use crate::error::Result;
use crate::report::ReportSpec;
use crate::types::Orientation;
use crate::types::PageSize;
use crate::types::ReportFormat;

pub const STANDARD_HEADER: &str = "Sales Report";
pub const STANDARD_FOOTER: &str = "Confidential";

/// Named preset, for callers that pick one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    StandardPdf,
    StandardSpreadsheet,
}

impl Preset {
    /// Run the preset's mandatory steps and defaults
    pub fn start(self, title: &str, start: NaiveDate, end: NaiveDate) -> Result<OptionalStage> {
        match self {
            Preset::StandardPdf => standard_pdf(title, start, end),
            Preset::StandardSpreadsheet => standard_spreadsheet(title, start, end),
        }
    }
}

/// PDF with the standard header and footer on numbered portrait A4 pages
pub fn standard_pdf(title: &str, start: NaiveDate, end: NaiveDate) -> Result<OptionalStage> {
    Ok(ReportSpec::builder()
        .with_title(title)?
        .with_format(ReportFormat::Pdf)
        .for_period(start, end)
        .with_header(STANDARD_HEADER)
        .with_footer(STANDARD_FOOTER)
        .layout(Orientation::Portrait, PageSize::A4, true))
}

/// Plain spreadsheet with nothing beyond the mandatory steps
pub fn standard_spreadsheet(
    title: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<OptionalStage> {
    Ok(ReportSpec::builder()
        .with_title(title)?
        .with_format(ReportFormat::Spreadsheet)
        .for_period(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::report::PageLayout;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_standard_pdf_defaults() {
        let spec = standard_pdf("Monthly Sales", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap()
            .add_columns(["Product", "Qty", "Value"])
            .build()
            .unwrap();

        assert_eq!(spec.format(), ReportFormat::Pdf);
        assert_eq!(spec.header_text(), Some(STANDARD_HEADER));
        assert_eq!(spec.footer_text(), Some(STANDARD_FOOTER));
        assert_eq!(
            *spec.layout(),
            PageLayout {
                orientation: Some(Orientation::Portrait),
                page_size: Some(PageSize::A4),
                page_numbers: true,
            }
        );
    }

    #[test]
    fn test_preset_can_be_overridden() {
        let spec = standard_pdf("Annual Sales", date(2024, 1, 1), date(2024, 12, 31))
            .unwrap()
            .add_column("Product")
            .layout(Orientation::Landscape, PageSize::A4, false)
            .build()
            .unwrap();

        assert_eq!(spec.orientation(), Some(Orientation::Landscape));
        assert!(!spec.include_page_numbers());
        assert!(spec.include_header());
    }

    #[test]
    fn test_standard_spreadsheet_is_bare() {
        let spec = standard_spreadsheet("Quarterly", date(2024, 1, 1), date(2024, 3, 31))
            .unwrap()
            .add_columns(["Seller", "Region", "Total"])
            .build()
            .unwrap();

        assert_eq!(spec.format(), ReportFormat::Spreadsheet);
        assert!(!spec.include_header());
        assert!(!spec.include_footer());
        assert_eq!(*spec.layout(), PageLayout::default());
    }

    #[test]
    fn test_presets_still_require_columns() {
        let err = standard_spreadsheet("Quarterly", date(2024, 1, 1), date(2024, 3, 31))
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, ReportError::MissingField { field: "columns" });
    }

    #[test]
    fn test_named_preset_dispatch() {
        let spec = Preset::StandardSpreadsheet
            .start("Quarterly", date(2024, 1, 1), date(2024, 3, 31))
            .unwrap()
            .add_column("Total")
            .build()
            .unwrap();
        assert_eq!(spec.format(), ReportFormat::Spreadsheet);

        let spec = Preset::StandardPdf
            .start("Monthly", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap()
            .add_column("Total")
            .build()
            .unwrap();
        assert_eq!(spec.format(), ReportFormat::Pdf);
    }

    #[test]
    fn test_presets_reject_blank_title() {
        assert!(standard_pdf(" ", date(2024, 1, 1), date(2024, 1, 31)).is_err());
    }
}
