//! Declarative report requests loaded from TOML.
//!
//! A request is only a description. It is turned into a [`ReportSpec`] by
//! replaying it through the staged builder, so every rule the builder
//! enforces applies to files as well.
//!
//! ```toml
//! title = "Monthly Sales"
//! format = "pdf"
//! start = "2024-01-01"
//! end = "2024-01-31"
//! columns = ["Product", "Qty", "Value"]
//! charts = "Bar"
//!
//! [layout]
//! orientation = "portrait"
//! page_size = "a4"
//! page_numbers = true
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::builders::OptionalStage;
use crate::error::Result;
use crate::report::ReportSpec;
use crate::types::Orientation;
use crate::types::PageSize;
use crate::types::ReportFormat;

/// Errors from reading a request file
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid report request: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Layout table of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutRequest {
    pub orientation: Orientation,
    pub page_size: PageSize,
    #[serde(default)]
    pub page_numbers: bool,
}

/// Serializable description of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportRequest {
    pub title: String,
    pub format: ReportFormat,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub charts: Option<String>,
    #[serde(default)]
    pub summary: bool,
    pub sort_by: Option<String>,
    pub group_by: Option<String>,
    #[serde(default)]
    pub totals: bool,
    pub layout: Option<LayoutRequest>,
    pub company_logo: Option<String>,
    pub watermark: Option<String>,
}

impl ReportRequest {
    pub fn from_toml_str(input: &str) -> std::result::Result<Self, RequestError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> std::result::Result<Self, RequestError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| RequestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded report request");
        Self::from_toml_str(&input)
    }

    /// Replay this request through the builder stages
    pub fn into_builder(self) -> Result<OptionalStage> {
        let mut builder = ReportSpec::builder()
            .with_title(&self.title)?
            .with_format(self.format)
            .for_period(self.start, self.end)
            .add_columns(self.columns)
            .add_filters(self.filters);

        if let Some(header) = self.header {
            builder = builder.with_header(header);
        }
        if let Some(footer) = self.footer {
            builder = builder.with_footer(footer);
        }
        if let Some(chart_type) = self.charts {
            builder = builder.with_charts(chart_type);
        }
        if self.summary {
            builder = builder.with_summary();
        }
        if let Some(field) = self.sort_by {
            builder = builder.sort_by(field);
        }
        if let Some(field) = self.group_by {
            builder = builder.group_by(field);
        }
        if self.totals {
            builder = builder.with_totals();
        }
        if let Some(layout) = self.layout {
            builder = builder.layout(layout.orientation, layout.page_size, layout.page_numbers);
        }
        if let Some(path) = self.company_logo {
            builder = builder.with_company_logo(path);
        }
        if let Some(text) = self.watermark {
            builder = builder.with_watermark(text);
        }
        Ok(builder)
    }

    pub fn build(self) -> Result<ReportSpec> {
        self.into_builder()?.build()
    }
}
