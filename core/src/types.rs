//! Value types shared by the builder, the finished spec and the renderers.
//!
//! The enums are closed sets, so a value of any of them is valid by
//! construction. [`ReportTitle`] is the only newtype that validates.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ReportError;
use crate::error::Result;

// ============================================================================
// Enumerations
// ============================================================================

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Spreadsheet,
    Html,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Pdf => write!(f, "PDF"),
            ReportFormat::Spreadsheet => write!(f, "SPREADSHEET"),
            ReportFormat::Html => write!(f, "HTML"),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "PORTRAIT"),
            Orientation::Landscape => write!(f, "LANDSCAPE"),
        }
    }
}

/// Paper size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A4,
    Letter,
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A4 => write!(f, "A4"),
            PageSize::Letter => write!(f, "LETTER"),
        }
    }
}

// ============================================================================
// Newtype Wrappers
// ============================================================================

/// Non-blank, trimmed report title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReportTitle(String);

impl ReportTitle {
    /// Create a title, trimming surrounding whitespace.
    ///
    /// Fails with [`ReportError::InvalidInput`] when nothing is left after trimming.
    pub fn new(title: impl AsRef<str>) -> Result<Self> {
        let trimmed = title.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::InvalidInput {
                field: "title",
                reason: "title must not be blank",
            });
        }
        Ok(ReportTitle(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for ReportTitle {
    type Error = ReportError;

    fn try_from(title: &str) -> Result<Self> {
        Self::new(title)
    }
}

impl TryFrom<String> for ReportTitle {
    type Error = ReportError;

    fn try_from(title: String) -> Result<Self> {
        Self::new(title)
    }
}

impl TryFrom<&String> for ReportTitle {
    type Error = ReportError;

    fn try_from(title: &String) -> Result<Self> {
        Self::new(title)
    }
}

impl FromStr for ReportTitle {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for ReportTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true when `text` is absent or only whitespace.
pub(crate) fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}
