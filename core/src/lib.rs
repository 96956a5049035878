//! Staged, validating construction of immutable report specifications.
//!
//! Start with [`ReportSpec::builder`] or one of the [`presets`], take the
//! mandatory title, format and period steps, add any optional configuration,
//! then call `build()`. Finished specs are handed to a [`ReportRenderer`].

pub mod builders;
pub mod error;
pub mod render;
pub mod report;
pub mod request;
pub mod types;

pub use builders::FormatStage;
pub use builders::OptionalStage;
pub use builders::PeriodStage;
pub use builders::ReportSpecBuilder;
pub use builders::presets;
pub use error::ReportError;
pub use error::Result;
pub use render::JsonRenderer;
pub use render::ReportRenderer;
pub use render::TextRenderer;
pub use report::PageLayout;
pub use report::ReportPeriod;
pub use report::ReportSpec;
pub use report::Section;
pub use request::ReportRequest;
pub use request::RequestError;
pub use types::Orientation;
pub use types::PageSize;
pub use types::ReportFormat;
pub use types::ReportTitle;
