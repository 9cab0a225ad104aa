//! Wire types for the RDS listing responses.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One untyped record as returned by a listing endpoint, prior to mapping.
pub type RawRecord = Map<String, Value>;

/// Response envelope for `DescribeDBInstances`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceListResponse {
    /// Container for the instance records on this page.
    pub items: InstanceItems,

    /// Total matching records across all pages.
    pub total_record_count: i64,

    /// Request id assigned by the service.
    pub request_id: String,
}

/// Record container for `DescribeDBInstances`.
#[derive(Debug, Deserialize)]
pub struct InstanceItems {
    /// Raw instance records.
    #[serde(rename = "DBInstance")]
    pub db_instance: Vec<RawRecord>,
}

/// Response envelope for `DescribeSlowLogs`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SlowLogListResponse {
    /// Container for the slow log records on this page.
    pub items: SlowLogItems,

    /// Total matching records across all pages.
    pub total_record_count: i64,

    /// Request id assigned by the service.
    pub request_id: String,
}

/// Record container for `DescribeSlowLogs`.
#[derive(Debug, Deserialize)]
pub struct SlowLogItems {
    /// Raw slow log records.
    #[serde(rename = "SQLSlowLog")]
    pub sql_slow_log: Vec<RawRecord>,
}

/// Copies a required string field out of a raw record.
pub(crate) fn required_str(record: &RawRecord, field: &'static str) -> Result<String> {
    let value = record.get(field).ok_or(Error::MissingField { field })?;

    value
        .as_str()
        .map(str::to_owned)
        .ok_or(Error::InvalidField {
            field,
            expected: "a string",
        })
}

/// Copies a required integer field out of a raw record.
pub(crate) fn required_i64(record: &RawRecord, field: &'static str) -> Result<i64> {
    let value = record.get(field).ok_or(Error::MissingField { field })?;

    value.as_i64().ok_or(Error::InvalidField {
        field,
        expected: "an integer",
    })
}

/// Copies a required numeric field out of a raw record.
///
/// Accepts both integral and fractional wire values; the service reports
/// timing fields with fractional-second precision.
pub(crate) fn required_f64(record: &RawRecord, field: &'static str) -> Result<f64> {
    let value = record.get(field).ok_or(Error::MissingField { field })?;

    value.as_f64().ok_or(Error::InvalidField {
        field,
        expected: "a number",
    })
}
