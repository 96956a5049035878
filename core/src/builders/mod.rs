//! Staged builder for [`crate::ReportSpec`].
//!
//! The builder type carries a zero-sized stage marker so the mandatory steps
//! (title, format, period) can only be taken in order, and optional
//! configuration plus `build()` only become available after the period is set.

mod draft;
pub mod presets;
pub mod report_builder;

pub(crate) use draft::ReportDraft;
pub use report_builder::*;

/// Trait for builder stage markers
pub trait BuilderState {
    /// Stage name used in trace output
    const NAME: &'static str;
}

/// Marker for the initial stage: only the title can be set
#[derive(Debug, Clone, Copy)]
pub struct Init;

/// Marker for the stage waiting for the output format
#[derive(Debug, Clone, Copy)]
pub struct AwaitingFormat;

/// Marker for the stage waiting for the reporting period
#[derive(Debug, Clone, Copy)]
pub struct AwaitingPeriod;

/// Marker for the open-ended optional stage that can build
#[derive(Debug, Clone, Copy)]
pub struct Configurable;

impl BuilderState for Init {
    const NAME: &'static str = "init";
}
impl BuilderState for AwaitingFormat {
    const NAME: &'static str = "format";
}
impl BuilderState for AwaitingPeriod {
    const NAME: &'static str = "period";
}
impl BuilderState for Configurable {
    const NAME: &'static str = "optional";
}

/// Handle returned by `with_title`
pub type FormatStage = ReportSpecBuilder<AwaitingFormat>;

/// Handle returned by `with_format`
pub type PeriodStage = ReportSpecBuilder<AwaitingPeriod>;

/// Handle returned by `for_period` and by every optional setter
pub type OptionalStage = ReportSpecBuilder<Configurable>;
