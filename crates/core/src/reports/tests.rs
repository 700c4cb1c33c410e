//! Tests for report request validation and payload building.

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::json;

use super::error::ReportRequestError;
use super::types::{ReportRequest, ReportType};
use super::validation::{RunReportInput, coerce_exclude_accounts, validate_run_report};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn valid_input() -> RunReportInput {
    RunReportInput {
        realm_id: Some("12314567890".into()),
        report_type: Some("ProfitAndLoss".into()),
        start_date: Some("2024-01-01".into()),
        end_date: Some("2024-03-31".into()),
        exclude_account_ids: None,
    }
}

// ============================================================================
// Report types
// ============================================================================

#[test]
fn test_report_type_round_trip() {
    for report_type in ReportType::ALL {
        assert_eq!(ReportType::parse(report_type.as_str()), Some(report_type));
    }
    assert_eq!(ReportType::parse("CashFlow"), None);
}

#[test]
fn test_report_type_display_names() {
    assert_eq!(ReportType::ProfitAndLoss.display_name(), "Profit & Loss");
    assert_eq!(ReportType::GeneralLedger.display_name(), "General Ledger");
}

// ============================================================================
// Validation order
// ============================================================================

#[test]
fn test_valid_request_accepted() {
    let request = validate_run_report(&valid_input()).unwrap();
    assert_eq!(request.realm_id, "12314567890");
    assert_eq!(request.report_type, ReportType::ProfitAndLoss);
    assert_eq!(request.start_date, date(2024, 1, 1));
    assert_eq!(request.end_date, date(2024, 3, 31));
    assert!(request.exclude_account_ids.is_empty());
}

#[test]
fn test_missing_company_reported_first() {
    // Everything else is also missing; the company must win.
    let input = RunReportInput::default();
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::MissingCompany)
    );
}

#[test]
fn test_blank_realm_counts_as_missing() {
    let input = RunReportInput {
        realm_id: Some("   ".into()),
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::MissingCompany)
    );
}

#[test]
fn test_missing_report_type_reported_second() {
    let input = RunReportInput {
        report_type: None,
        start_date: None,
        end_date: None,
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::MissingReportType)
    );
}

#[test]
fn test_unknown_report_type_rejected() {
    let input = RunReportInput {
        report_type: Some("CashFlow".into()),
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::UnknownReportType("CashFlow".into()))
    );
}

#[test]
fn test_missing_either_date_rejected() {
    let input = RunReportInput {
        end_date: None,
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::MissingDates)
    );

    let input = RunReportInput {
        start_date: None,
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::MissingDates)
    );
}

#[test]
fn test_invalid_calendar_date_rejected() {
    let input = RunReportInput {
        start_date: Some("2024-02-30".into()),
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::InvalidDate("2024-02-30".into()))
    );
}

#[test]
fn test_inverted_date_range_rejected() {
    let input = RunReportInput {
        start_date: Some("2024-03-01".into()),
        end_date: Some("2024-02-01".into()),
        ..valid_input()
    };
    assert_eq!(
        validate_run_report(&input),
        Err(ReportRequestError::InvalidDateRange {
            start: date(2024, 3, 1),
            end: date(2024, 2, 1),
        })
    );
}

#[test]
fn test_equal_dates_accepted() {
    let input = RunReportInput {
        start_date: Some("2024-02-01".into()),
        end_date: Some("2024-02-01".into()),
        ..valid_input()
    };
    assert!(validate_run_report(&input).is_ok());
}

// ============================================================================
// Excluded accounts coercion
// ============================================================================

#[test]
fn test_exclude_accounts_array_coerced_to_strings() {
    let value = json!(["5100", 5200, true, null, {"nested": 1}]);
    assert_eq!(
        coerce_exclude_accounts(Some(&value)),
        vec!["5100", "5200", "true"]
    );
}

#[test]
fn test_exclude_accounts_comma_separated_string() {
    let value = json!("5100, 5200,Utilities, Bank Fees,");
    assert_eq!(
        coerce_exclude_accounts(Some(&value)),
        vec!["5100", "5200", "Utilities", "Bank Fees"]
    );
}

#[test]
fn test_exclude_accounts_defaults_to_empty() {
    assert!(coerce_exclude_accounts(None).is_empty());
    assert!(coerce_exclude_accounts(Some(&json!(42))).is_empty());
    assert!(coerce_exclude_accounts(Some(&json!({}))).is_empty());
}

// ============================================================================
// Filename and payload
// ============================================================================

#[test]
fn test_filename_pattern() {
    let request = ReportRequest {
        realm_id: "12314567890".into(),
        report_type: ReportType::BalanceSheet,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 3, 31),
        exclude_account_ids: vec![],
    };
    assert_eq!(request.filename(), "QBO_BalanceSheet_2024-01-01_2024-03-31.xlsx");
}

#[test]
fn test_payload_wire_shape() {
    let request = ReportRequest {
        realm_id: "12314567890".into(),
        report_type: ReportType::TrialBalance,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 31),
        exclude_account_ids: vec!["5100".into()],
    };

    let payload = serde_json::to_value(request.to_payload()).unwrap();
    assert_eq!(
        payload,
        json!({
            "realmId": "12314567890",
            "reportType": "TrialBalance",
            "startDate": "2024-01-01",
            "endDate": "2024-01-31",
            "excludeAccountIds": ["5100"],
            "format": "xlsx",
        })
    );
}

// ============================================================================
// Property: date range acceptance matches start <= end
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any pair of valid calendar dates, the request is accepted
    /// exactly when start <= end, and the rejection names the range.
    #[test]
    fn prop_date_range_validation(
        start_days in 0i64..20_000,
        end_days in 0i64..20_000,
    ) {
        let epoch = date(1970, 1, 1);
        let start = epoch + chrono::Duration::days(start_days);
        let end = epoch + chrono::Duration::days(end_days);

        let input = RunReportInput {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            ..valid_input()
        };

        match validate_run_report(&input) {
            Ok(request) => {
                prop_assert!(start <= end);
                prop_assert_eq!(request.start_date, start);
                prop_assert_eq!(request.end_date, end);
            }
            Err(ReportRequestError::InvalidDateRange { start: s, end: e }) => {
                prop_assert!(start > end);
                prop_assert_eq!(s, start);
                prop_assert_eq!(e, end);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// The delivered filename always follows the
    /// `QBO_<type>_<start>_<end>.xlsx` pattern.
    #[test]
    fn prop_filename_pattern(
        days in 0i64..20_000,
        span in 0i64..365,
        type_idx in 0usize..4,
    ) {
        let start = date(1970, 1, 1) + chrono::Duration::days(days);
        let end = start + chrono::Duration::days(span);
        let report_type = ReportType::ALL[type_idx];

        let request = ReportRequest {
            realm_id: "1".into(),
            report_type,
            start_date: start,
            end_date: end,
            exclude_account_ids: vec![],
        };

        prop_assert_eq!(
            request.filename(),
            format!("QBO_{}_{}_{}.xlsx", report_type.as_str(), start, end)
        );
    }
}
