//! The bundled sample reports shown by `reportspec demo`.

use chrono::NaiveDate;
use reportspec_core::Orientation;
use reportspec_core::PageSize;
use reportspec_core::ReportSpec;
use reportspec_core::Result;
use reportspec_core::presets;

const fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid demo date"),
    }
}

const YEAR_START: NaiveDate = day(2024, 1, 1);
const JANUARY_END: NaiveDate = day(2024, 1, 31);
const QUARTER_END: NaiveDate = day(2024, 3, 31);
const YEAR_END: NaiveDate = day(2024, 12, 31);

pub fn demo_reports() -> Result<Vec<ReportSpec>> {
    let monthly = presets::standard_pdf("Monthly Sales", YEAR_START, JANUARY_END)?
        .add_columns(["Product", "Quantity", "Value"])
        .add_filter("Status=Active")
        .with_charts("Bar")
        .with_summary()
        .group_by("Category")
        .with_totals()
        .with_company_logo("logo.png")
        .with_watermark("Confidential")
        .build()?;

    let quarterly = presets::standard_spreadsheet("Quarterly Report", YEAR_START, QUARTER_END)?
        .add_columns(["Seller", "Region", "Total"])
        .with_charts("Line")
        .group_by("Region")
        .with_totals()
        .build()?;

    let annual = presets::standard_pdf("Annual Sales", YEAR_START, YEAR_END)?
        .add_columns(["Product", "Quantity", "Value"])
        .with_charts("Pie")
        .with_totals()
        .layout_default_numbering(Orientation::Landscape, PageSize::A4)
        .build()?;

    Ok(vec![monthly, quarterly, annual])
}
