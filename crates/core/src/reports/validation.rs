//! Raw report request validation.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::error::ReportRequestError;
use super::types::{ReportRequest, ReportType};

/// Raw report-run input as submitted by the browser form.
///
/// Everything is optional here; validation decides what is missing and in
/// which order to report it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportInput {
    /// External tenant identifier of the chosen company.
    pub realm_id: Option<String>,
    /// Report type wire identifier.
    pub report_type: Option<String>,
    /// Period start, ISO `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Period end, ISO `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Excluded accounts: a JSON array of scalars or a comma-separated
    /// string.
    pub exclude_account_ids: Option<Value>,
}

/// Validates a raw request into a [`ReportRequest`].
///
/// Failure order: missing company, missing report type, missing dates,
/// invalid date, inverted date range. Company resolution against the
/// registry happens separately, after this check.
pub fn validate_run_report(input: &RunReportInput) -> Result<ReportRequest, ReportRequestError> {
    let realm_id = match input.realm_id.as_deref().map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return Err(ReportRequestError::MissingCompany),
    };

    let report_type = match input.report_type.as_deref().map(str::trim) {
        Some(r) if !r.is_empty() => {
            ReportType::parse(r).ok_or_else(|| ReportRequestError::UnknownReportType(r.into()))?
        }
        _ => return Err(ReportRequestError::MissingReportType),
    };

    let (start_raw, end_raw) = match (
        input.start_date.as_deref().map(str::trim),
        input.end_date.as_deref().map(str::trim),
    ) {
        (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => (s, e),
        _ => return Err(ReportRequestError::MissingDates),
    };

    let start_date = parse_iso_date(start_raw)?;
    let end_date = parse_iso_date(end_raw)?;

    // ISO date strings sort lexicographically in calendar order; parsing
    // first gives the same comparison plus calendar validity.
    if start_date > end_date {
        return Err(ReportRequestError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    Ok(ReportRequest {
        realm_id: realm_id.to_string(),
        report_type,
        start_date,
        end_date,
        exclude_account_ids: coerce_exclude_accounts(input.exclude_account_ids.as_ref()),
    })
}

fn parse_iso_date(raw: &str) -> Result<NaiveDate, ReportRequestError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ReportRequestError::InvalidDate(raw.to_string()))
}

/// Coerces the excluded-accounts field to a list of strings.
///
/// Accepts a JSON array (scalars stringified, anything else dropped) or a
/// comma-separated string; everything else defaults to empty.
#[must_use]
pub fn coerce_exclude_accounts(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => {
                    let s = s.trim();
                    (!s.is_empty()).then(|| s.to_string())
                }
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(raw)) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
