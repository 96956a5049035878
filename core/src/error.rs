use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while constructing a [`crate::ReportSpec`].
///
/// `InvalidInput` is raised eagerly by the stage that received the bad value.
/// `MissingField` and `InvalidRange` are only produced by `build()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("invalid value for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid period: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl ReportError {
    /// Name of the field this error refers to, if any.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } | Self::MissingField { field } => Some(*field),
            Self::InvalidRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReportError::MissingField { field: "columns" };
        assert_eq!(err.to_string(), "missing required field: columns");

        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = ReportError::InvalidRange { start, end };
        assert_eq!(
            err.to_string(),
            "invalid period: start 2024-03-01 is after end 2024-01-01"
        );
        assert_eq!(err.field(), None);
    }
}
