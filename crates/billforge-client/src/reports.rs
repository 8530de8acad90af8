//! Report operations: asynchronous CSV exports.

use billforge_core::{Page, Report, ReportCreate, ReportCsv, ReportId, ReportStatus};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_reports`].
#[derive(Debug, Clone, Default)]
pub struct ReportListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given statuses.
    pub status: Vec<ReportStatus>,
}

impl ReportListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("status", self.status.iter());
        query
    }
}

impl Client {
    /// List reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_reports(&self, params: &ReportListParams) -> Result<Page<Report>> {
        self.get_page("list_reports", "/reports", &params.to_query())
            .await
    }

    /// Request a report. Generation is asynchronous; poll
    /// [`Client::get_report`] until its status is `ready`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_report(&self, report: &ReportCreate) -> Result<Report> {
        self.send_entity("create_report", Method::POST, "/reports", report)
            .await
    }

    /// Get a report by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_report(&self, id: &ReportId) -> Result<Report> {
        self.get_entity("get_report", &format!("/reports/{id}"), &QueryParams::new())
            .await
    }

    /// Get a time-limited download URL for a ready report's CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_report_csv(&self, id: &ReportId) -> Result<ReportCsv> {
        self.get_entity(
            "get_report_csv",
            &format!("/reports/{id}/download-url"),
            &QueryParams::new(),
        )
        .await
    }
}
