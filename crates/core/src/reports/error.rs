//! Report request error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating a raw report request.
///
/// Validation reports the first violated condition, in this order:
/// missing company, missing report type, missing dates, inverted date range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportRequestError {
    /// No company/realm identifier was supplied.
    #[error("Missing realmId.")]
    MissingCompany,

    /// No report type was supplied.
    #[error("Missing reportType.")]
    MissingReportType,

    /// The report type is not one of the known reports.
    #[error("Unknown reportType: {0}.")]
    UnknownReportType(String),

    /// Start or end date was missing.
    #[error("Missing dates.")]
    MissingDates,

    /// A date was not a valid ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}.")]
    InvalidDate(String),

    /// The start date is after the end date.
    #[error("Start date {start} is after end date {end}.")]
    InvalidDateRange {
        /// Period start.
        start: NaiveDate,
        /// Period end.
        end: NaiveDate,
    },
}
