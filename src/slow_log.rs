//! Slow query log records.

use core::fmt;

use serde::Serialize;

use crate::api::models::{self, RawRecord};
use crate::error::Result;

/// One slow-executing SQL statement captured by a database instance.
///
/// A read-only snapshot of remote state at fetch time; identity is the slow
/// log id. Values are copied from the service verbatim: times are seconds
/// (reported with fractional precision), counts are totals over the
/// statement's reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlowLog {
    /// Database the statement ran against.
    pub db_name: String,

    /// When the log entry was created.
    pub create_time: String,

    /// Id of the SQL statement template.
    pub sql_id: String,

    /// Unique id of this slow log entry.
    pub slow_log_id: String,

    /// Statement text.
    pub sql_text: String,

    /// Longest execution time observed.
    pub max_execution_time: f64,

    /// Largest number of rows returned by one execution.
    pub return_max_row_count: i64,

    /// Total rows returned across executions.
    pub return_total_row_counts: i64,

    /// Largest number of rows scanned by one execution.
    pub parse_max_row_count: i64,

    /// Total rows scanned across executions.
    pub parse_total_row_counts: i64,

    /// Longest lock wait observed.
    pub max_lock_time: f64,

    /// Total lock wait across executions.
    pub total_lock_times: f64,

    /// Number of executions recorded.
    pub mysql_total_execution_counts: i64,

    /// Total execution time across executions.
    pub mysql_total_execution_times: f64,
}

impl TryFrom<&RawRecord> for SlowLog {
    type Error = crate::error::Error;

    /// Maps one raw listing record. Every field is required and copied
    /// without transformation.
    fn try_from(record: &RawRecord) -> Result<Self> {
        Ok(Self {
            db_name: models::required_str(record, "DBName")?,
            create_time: models::required_str(record, "CreateTime")?,
            sql_id: models::required_str(record, "SQLId")?,
            slow_log_id: models::required_str(record, "SlowLogId")?,
            sql_text: models::required_str(record, "SQLText")?,
            max_execution_time: models::required_f64(record, "MaxExecutionTime")?,
            return_max_row_count: models::required_i64(record, "ReturnMaxRowCount")?,
            return_total_row_counts: models::required_i64(record, "ReturnTotalRowCounts")?,
            parse_max_row_count: models::required_i64(record, "ParseMaxRowCount")?,
            parse_total_row_counts: models::required_i64(record, "ParseTotalRowCounts")?,
            max_lock_time: models::required_f64(record, "MaxLockTime")?,
            total_lock_times: models::required_f64(record, "TotalLockTimes")?,
            mysql_total_execution_counts: models::required_i64(record, "MySQLTotalExecutionCounts")?,
            mysql_total_execution_times: models::required_f64(record, "MySQLTotalExecutionTimes")?,
        })
    }
}

impl fmt::Display for SlowLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slow_log_id)
    }
}
