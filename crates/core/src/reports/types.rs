//! Report data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Content type of the generated spreadsheet.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The fixed set of reports the external webhook can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    /// Profit & Loss statement.
    ProfitAndLoss,
    /// Balance Sheet.
    BalanceSheet,
    /// Trial Balance.
    TrialBalance,
    /// General Ledger.
    GeneralLedger,
}

impl ReportType {
    /// All report types, in menu order.
    pub const ALL: [Self; 4] = [
        Self::ProfitAndLoss,
        Self::BalanceSheet,
        Self::TrialBalance,
        Self::GeneralLedger,
    ];

    /// Wire identifier, as the webhook expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfitAndLoss => "ProfitAndLoss",
            Self::BalanceSheet => "BalanceSheet",
            Self::TrialBalance => "TrialBalance",
            Self::GeneralLedger => "GeneralLedger",
        }
    }

    /// Human-readable name for the report picker.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ProfitAndLoss => "Profit & Loss",
            Self::BalanceSheet => "Balance Sheet",
            Self::TrialBalance => "Trial Balance",
            Self::GeneralLedger => "General Ledger",
        }
    }

    /// Parses a wire identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated report request, ready to forward.
///
/// Transient: constructed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// External tenant identifier of the chosen company.
    pub realm_id: String,
    /// Report to generate.
    pub report_type: ReportType,
    /// Period start (inclusive).
    pub start_date: NaiveDate,
    /// Period end (inclusive).
    pub end_date: NaiveDate,
    /// Account identifiers to exclude from the report.
    pub exclude_account_ids: Vec<String>,
}

impl ReportRequest {
    /// Name of the spreadsheet file delivered to the browser.
    #[must_use]
    pub fn filename(&self) -> String {
        format!(
            "QBO_{}_{}_{}.xlsx",
            self.report_type, self.start_date, self.end_date
        )
    }

    /// Builds the JSON payload sent to the report webhook.
    #[must_use]
    pub fn to_payload(&self) -> WebhookPayload {
        WebhookPayload {
            realm_id: self.realm_id.clone(),
            report_type: self.report_type.as_str().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            exclude_account_ids: self.exclude_account_ids.clone(),
            format: "xlsx",
        }
    }
}

/// JSON payload shape the report webhook accepts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// External tenant identifier.
    pub realm_id: String,
    /// Report type wire identifier.
    pub report_type: String,
    /// Period start, ISO `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    /// Period end, ISO `YYYY-MM-DD`.
    pub end_date: NaiveDate,
    /// Excluded account identifiers, coerced to strings.
    pub exclude_account_ids: Vec<String>,
    /// Output format, fixed to `xlsx`.
    pub format: &'static str,
}
