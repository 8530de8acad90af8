//! Report entities: asynchronous CSV exports of billing data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ReportId;

/// Lifecycle state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Being generated.
    Pending,
    /// Generated and downloadable.
    Ready,
    /// Generation failed.
    Failed,
    /// Download window elapsed.
    Expired,
}

impl ReportStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a report exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// One row per adjustment.
    Adjustments,
    /// One row per adjustment line.
    AdjustmentLineItems,
    /// One row per transaction.
    Transactions,
    /// One row per transaction line.
    TransactionLineItems,
    /// One row per product-price pair.
    ProductsPrices,
    /// One row per discount.
    Discounts,
}

/// Comparison operator for a report filter; equality when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Strictly before the value.
    Lt,
    /// At or after the value.
    Gte,
}

/// Field a report filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterName {
    /// Filter on last update time.
    UpdatedAt,
    /// Filter on adjustment action.
    Action,
    /// Filter on entity status.
    Status,
    /// Filter on collection mode.
    CollectionMode,
    /// Filter on transaction origin.
    Origin,
}

/// One filter restricting the rows a report includes.
///
/// Values may be a single string or an array of strings depending on the
/// field, so they stay raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportFilter {
    /// Field to filter on.
    pub name: FilterName,
    /// Comparison operator; equality when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<FilterOperator>,
    /// Value or values to compare against.
    pub value: serde_json::Value,
}

/// An asynchronous CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    /// Report identifier.
    pub id: ReportId,
    /// Lifecycle state.
    pub status: ReportStatus,
    /// What the report exports.
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Filters applied.
    #[serde(default)]
    pub filters: Vec<ReportFilter>,
    /// Row count, once generated.
    pub rows: Option<u64>,
    /// When the download expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the report was requested.
    pub created_at: DateTime<Utc>,
    /// When the report last changed state.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when requesting a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportCreate {
    /// What to export.
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Filters to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<ReportFilter>>,
}

impl ReportCreate {
    /// Build an unfiltered report request.
    #[must_use]
    pub const fn new(report_type: ReportType) -> Self {
        Self {
            report_type,
            filters: None,
        }
    }
}

/// Location of the generated CSV for a ready report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportCsv {
    /// Time-limited download URL.
    pub url: String,
}
