//! Report request domain.
//!
//! Pure logic for the report-run flow:
//! - Report type enumeration
//! - Raw request validation
//! - Webhook payload shape and output filename

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::ReportRequestError;
pub use types::{ReportRequest, ReportType, WebhookPayload, XLSX_CONTENT_TYPE};
pub use validation::{RunReportInput, coerce_exclude_accounts, validate_run_report};
