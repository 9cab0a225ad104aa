//! Blocking HTTP client for the RDS listing endpoints.

use core::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::info;

use super::models::{InstanceListResponse, RawRecord, SlowLogListResponse};
use super::sign;
use crate::config::Credentials;
use crate::error::{Error, Result};

/// Base URL for the RDS API.
const API_ENDPOINT: &str = "https://rds.aliyuncs.com/";

/// RDS API version date sent with every request.
const API_VERSION: &str = "2014-08-15";

/// Request timeout for listing calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the RDS describe endpoints.
///
/// Holds the access-key pair and a blocking HTTP client. Every listing call
/// issues one signed GET request; failures propagate to the caller
/// unretried.
pub struct RdsClient {
    http: Client,
    credentials: Credentials,
}

impl RdsClient {
    /// Creates a new client from an access-key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { http, credentials })
    }

    /// Lists one page of database instances in a region.
    ///
    /// `page_size` must be within the service's `1..=100` range; an
    /// out-of-range value is rejected remotely, not locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the response envelope does not parse.
    pub fn list_instances(
        &self,
        region: &str,
        page_size: usize,
        page_number: usize,
    ) -> Result<Vec<RawRecord>> {
        info!(region, page_size, page_number, "Listing instances");

        let params = vec![
            ("Action".to_owned(), "DescribeDBInstances".to_owned()),
            ("Version".to_owned(), API_VERSION.to_owned()),
            ("RegionId".to_owned(), region.to_owned()),
            ("PageSize".to_owned(), page_size.to_string()),
            ("PageNumber".to_owned(), page_number.to_string()),
        ];

        let body = self.execute(params)?;
        let response: InstanceListResponse = serde_json::from_str(&body)?;

        info!(
            count = response.items.db_instance.len(),
            total = response.total_record_count,
            request_id = %response.request_id,
            "Received instance page"
        );

        Ok(response.items.db_instance)
    }

    /// Lists one page of slow query logs for an instance.
    ///
    /// `start_date` and `end_date` are calendar dates; the service takes
    /// them as UTC-marked date strings with no time component
    /// (`2021-05-01Z`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the response envelope does not parse.
    pub fn list_slow_logs(
        &self,
        instance_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        page_size: usize,
        page_number: usize,
    ) -> Result<Vec<RawRecord>> {
        info!(
            instance_id,
            %start_date,
            %end_date,
            page_size,
            page_number,
            "Listing slow logs"
        );

        let params = vec![
            ("Action".to_owned(), "DescribeSlowLogs".to_owned()),
            ("Version".to_owned(), API_VERSION.to_owned()),
            ("DBInstanceId".to_owned(), instance_id.to_owned()),
            ("StartTime".to_owned(), utc_date(start_date)),
            ("EndTime".to_owned(), utc_date(end_date)),
            ("PageSize".to_owned(), page_size.to_string()),
            ("PageNumber".to_owned(), page_number.to_string()),
        ];

        let body = self.execute(params)?;
        let response: SlowLogListResponse = serde_json::from_str(&body)?;

        info!(
            count = response.items.sql_slow_log.len(),
            total = response.total_record_count,
            request_id = %response.request_id,
            "Received slow log page"
        );

        Ok(response.items.sql_slow_log)
    }

    /// Signs and issues one GET request, returning the response body.
    fn execute(&self, params: Vec<(String, String)>) -> Result<String> {
        let params = sign::sign_request(params, &self.credentials);

        let response = self.http.get(API_ENDPOINT).query(&params).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Status { status, body });
        }

        Ok(response.text()?)
    }
}

/// Formats a date the way the slow log endpoint expects: the calendar date
/// with a trailing UTC marker and no time component.
fn utc_date(date: NaiveDate) -> String {
    format!("{}Z", date.format("%Y-%m-%d"))
}
