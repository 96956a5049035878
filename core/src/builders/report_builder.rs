//! Type-safe staged builder for report specifications.
//!
//! Stages are taken strictly in order: title, format, period. Only then do the
//! optional setters and `build()` exist on the builder type.
//!
//! ```
//! use chrono::NaiveDate;
//! use reportspec_core::ReportFormat;
//! use reportspec_core::ReportSpec;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//!
//! let spec = ReportSpec::builder()
//!     .with_title("Monthly Sales")?
//!     .with_format(ReportFormat::Pdf)
//!     .for_period(start, end)
//!     .add_columns(["Product", "Qty", "Value"])
//!     .with_totals()
//!     .build()?;
//!
//! assert_eq!(spec.title(), "Monthly Sales");
//! # Ok::<(), reportspec_core::ReportError>(())
//! ```
//!
//! Skipping or reordering a mandatory step does not compile:
//!
//! ```compile_fail
//! use reportspec_core::ReportFormat;
//! use reportspec_core::ReportSpec;
//!
//! // format before title
//! let _ = ReportSpec::builder().with_format(ReportFormat::Pdf);
//! ```
//!
//! ```compile_fail
//! use chrono::NaiveDate;
//! use reportspec_core::ReportSpec;
//!
//! // period before format
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let _ = ReportSpec::builder().with_title("Sales").unwrap().for_period(day, day);
//! ```
//!
//! ```compile_fail
//! use reportspec_core::ReportFormat;
//! use reportspec_core::ReportSpec;
//!
//! // optional configuration before the period
//! let _ = ReportSpec::builder()
//!     .with_title("Sales")
//!     .unwrap()
//!     .with_format(ReportFormat::Pdf)
//!     .add_column("Product");
//! ```
//!
//! ```compile_fail
//! use reportspec_core::ReportFormat;
//! use reportspec_core::ReportSpec;
//!
//! // build before the period
//! let _ = ReportSpec::builder()
//!     .with_title("Sales")
//!     .unwrap()
//!     .with_format(ReportFormat::Pdf)
//!     .build();
//! ```

use std::marker::PhantomData;

use chrono::NaiveDate;

use super::AwaitingFormat;
use super::AwaitingPeriod;
use super::BuilderState;
use super::Configurable;
use super::FormatStage;
use super::Init;
use super::OptionalStage;
use super::PeriodStage;
use super::ReportDraft;
use crate::error::Result;
use crate::report::PageLayout;
use crate::report::ReportSpec;
use crate::types::Orientation;
use crate::types::PageSize;
use crate::types::ReportFormat;
use crate::types::ReportTitle;

/// Staged builder for [`ReportSpec`] with compile-time stage tracking
#[derive(Debug, Clone)]
#[must_use]
pub struct ReportSpecBuilder<S: BuilderState> {
    draft: ReportDraft,
    _state: PhantomData<S>,
}

impl<S: BuilderState> ReportSpecBuilder<S> {
    fn advance<T: BuilderState>(self) -> ReportSpecBuilder<T> {
        tracing::trace!(from = S::NAME, to = T::NAME, "report builder advanced");
        ReportSpecBuilder {
            draft: self.draft,
            _state: PhantomData,
        }
    }
}

impl ReportSpecBuilder<Init> {
    /// Create a new builder in the initial stage
    pub fn new() -> Self {
        Self {
            draft: ReportDraft::default(),
            _state: PhantomData,
        }
    }

    /// Set the title (transitions to the format stage).
    ///
    /// The title is trimmed; blank input fails with
    /// [`crate::ReportError::InvalidInput`].
    pub fn with_title(mut self, title: impl AsRef<str>) -> Result<FormatStage> {
        let title = ReportTitle::new(title)?;
        self.draft.title = Some(title.into_inner());
        Ok(self.advance::<AwaitingFormat>())
    }
}

impl Default for ReportSpecBuilder<Init> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSpecBuilder<AwaitingFormat> {
    /// Set the output format (transitions to the period stage)
    pub fn with_format(mut self, format: ReportFormat) -> PeriodStage {
        self.draft.format = Some(format);
        self.advance::<AwaitingPeriod>()
    }
}

impl ReportSpecBuilder<AwaitingPeriod> {
    /// Set the reporting period (transitions to the optional stage).
    ///
    /// Ordering of `start` and `end` is checked by `build()`.
    pub fn for_period(mut self, start: NaiveDate, end: NaiveDate) -> OptionalStage {
        self.draft.start = Some(start);
        self.draft.end = Some(end);
        self.advance::<Configurable>()
    }
}

impl ReportSpecBuilder<Configurable> {
    /// Enable the header with the given text; later calls overwrite
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.draft.header.enable(text.into());
        self
    }

    /// Enable the footer with the given text; later calls overwrite
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.draft.footer.enable(text.into());
        self
    }

    /// Enable charts of the given type; later calls overwrite
    pub fn with_charts(mut self, chart_type: impl Into<String>) -> Self {
        self.draft.charts.enable(chart_type.into());
        self
    }

    pub const fn with_summary(mut self) -> Self {
        self.draft.include_summary = true;
        self
    }

    /// Append a column. Duplicates are kept.
    pub fn add_column(mut self, name: impl Into<String>) -> Self {
        self.draft.columns.push(name.into());
        self
    }

    /// Append columns in iteration order
    pub fn add_columns<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.draft.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append a filter expression
    pub fn add_filter(mut self, expr: impl Into<String>) -> Self {
        self.draft.filters.push(expr.into());
        self
    }

    /// Append filter expressions in iteration order
    pub fn add_filters<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.draft.filters.extend(exprs.into_iter().map(Into::into));
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.draft.sort_by = Some(field.into());
        self
    }

    pub fn group_by(mut self, field: impl Into<String>) -> Self {
        self.draft.group_by = Some(field.into());
        self
    }

    pub const fn with_totals(mut self) -> Self {
        self.draft.include_totals = true;
        self
    }

    /// Replace orientation, page size and page numbering together
    pub const fn layout(
        mut self,
        orientation: Orientation,
        page_size: PageSize,
        page_numbers: bool,
    ) -> Self {
        self.draft.layout = PageLayout {
            orientation: Some(orientation),
            page_size: Some(page_size),
            page_numbers,
        };
        self
    }

    /// [`Self::layout`] without page numbers
    pub const fn layout_default_numbering(self, orientation: Orientation, page_size: PageSize) -> Self {
        self.layout(orientation, page_size, false)
    }

    pub fn with_company_logo(mut self, path: impl Into<String>) -> Self {
        self.draft.company_logo = Some(path.into());
        self
    }

    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.draft.watermark = Some(text.into());
        self
    }

    /// Validate the collected configuration and produce a [`ReportSpec`].
    ///
    /// The builder is only borrowed: on failure it can be fixed and built
    /// again, and on success further changes never reach the returned spec.
    pub fn build(&self) -> Result<ReportSpec> {
        match self.draft.finalize() {
            Ok(spec) => {
                tracing::debug!(
                    title = spec.title(),
                    format = %spec.format(),
                    columns = spec.columns().len(),
                    "report spec built"
                );
                Ok(spec)
            }
            Err(err) => {
                tracing::debug!(error = %err, "report spec rejected");
                Err(err)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
