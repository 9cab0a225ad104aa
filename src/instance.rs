//! Database instance records and the bulk listing entry points.

use core::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::client::RdsClient;
use crate::api::models::{self, RawRecord};
use crate::error::Result;
use crate::pagination::{self, DEFAULT_PAGE_SIZE};
use crate::slow_log::SlowLog;

/// Description prefix that marks an instance as production.
const PRODUCTION_PREFIX: &str = "prod";

/// A managed database instance, as returned by the describe endpoint.
///
/// A read-only snapshot of remote state at fetch time; identity is the
/// instance id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    /// Unique instance id.
    pub instance_id: String,

    /// Operator-assigned description.
    pub description: String,

    /// Region the instance runs in.
    pub region: String,
}

impl Instance {
    /// Returns whether the description marks this instance as production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.description.starts_with(PRODUCTION_PREFIX)
    }

    /// Lists every instance in a region, paging until exhaustion.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fetch fails or a record cannot be
    /// mapped.
    pub fn list_all(client: &RdsClient, region: &str) -> Result<Vec<Self>> {
        pagination::fetch_all(
            |page_size, page_number| {
                let page = client.list_instances(region, page_size, page_number)?;
                page.iter().map(Self::try_from).collect()
            },
            DEFAULT_PAGE_SIZE,
        )
    }

    /// Lists every slow query log captured for this instance between two
    /// dates, paging until exhaustion.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fetch fails or a record cannot be
    /// mapped.
    pub fn list_all_slow_logs(
        &self,
        client: &RdsClient,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<SlowLog>> {
        pagination::fetch_all(
            |page_size, page_number| {
                let page = client.list_slow_logs(
                    &self.instance_id,
                    start_date,
                    end_date,
                    page_size,
                    page_number,
                )?;
                page.iter().map(SlowLog::try_from).collect()
            },
            DEFAULT_PAGE_SIZE,
        )
    }
}

impl TryFrom<&RawRecord> for Instance {
    type Error = crate::error::Error;

    /// Maps one raw listing record. Every field is required and copied
    /// without transformation.
    fn try_from(record: &RawRecord) -> Result<Self> {
        Ok(Self {
            instance_id: models::required_str(record, "DBInstanceId")?,
            description: models::required_str(record, "DBInstanceDescription")?,
            region: models::required_str(record, "RegionId")?,
        })
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.description, self.instance_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn instance_record(id: &str, description: &str, region: &str) -> RawRecord {
        let value = serde_json::json!({
            "DBInstanceId": id,
            "DBInstanceDescription": description,
            "RegionId": region,
        });

        value.as_object().expect("fixture is an object").clone()
    }

    #[test]
    fn test_mapping_copies_fields() {
        let record = instance_record("rm-uf6wjk5xxxxxxx", "prod-orders", "cn-shanghai");
        let instance = Instance::try_from(&record).expect("record maps");

        assert_eq!(instance.instance_id, "rm-uf6wjk5xxxxxxx");
        assert_eq!(instance.description, "prod-orders");
        assert_eq!(instance.region, "cn-shanghai");
    }

    #[test]
    fn test_mapping_keeps_empty_strings() {
        let record = instance_record("rm-1", "", "");
        let instance = Instance::try_from(&record).expect("record maps");

        assert_eq!(instance.instance_id, "rm-1");
        assert_eq!(instance.description, "");
        assert_eq!(instance.region, "");
    }

    #[test]
    fn test_mapping_missing_field() {
        let mut record = instance_record("rm-1", "prod-orders", "cn-shanghai");
        record.remove("DBInstanceDescription");

        assert!(matches!(
            Instance::try_from(&record),
            Err(Error::MissingField {
                field: "DBInstanceDescription"
            })
        ));
    }

    #[test]
    fn test_mapping_ignores_extra_fields() {
        let mut record = instance_record("rm-1", "staging", "cn-hangzhou");
        record.insert("Engine".to_owned(), serde_json::json!("MySQL"));

        let instance = Instance::try_from(&record).expect("record maps");
        assert_eq!(instance.description, "staging");
    }

    #[test]
    fn test_is_production() {
        let production = instance_record("rm-1", "production-db", "cn-shanghai");
        assert!(Instance::try_from(&production).unwrap().is_production());

        let staging = instance_record("rm-2", "staging", "cn-shanghai");
        assert!(!Instance::try_from(&staging).unwrap().is_production());

        // The prefix needs all four characters.
        let short = instance_record("rm-3", "pro", "cn-shanghai");
        assert!(!Instance::try_from(&short).unwrap().is_production());

        let exact = instance_record("rm-4", "prod", "cn-shanghai");
        assert!(Instance::try_from(&exact).unwrap().is_production());
    }

    #[test]
    fn test_display() {
        let instance = Instance::try_from(&instance_record("rm-1", "prod-orders", "cn-shanghai"))
            .expect("record maps");

        assert_eq!(instance.to_string(), "prod-orders(rm-1)");
    }

    #[test]
    fn test_paged_listing_end_to_end() {
        // 250 instances at page size 100: pages of 100, 100, 50.
        let records: Vec<RawRecord> = (0..250)
            .map(|i| instance_record(&format!("rm-{i:04}"), &format!("db-{i}"), "cn-shanghai"))
            .collect();
        let mut calls = 0;

        let instances = pagination::fetch_all(
            |page_size, page_number| {
                calls += 1;
                let start = (page_number - 1) * page_size;
                let end = (start + page_size).min(records.len());
                records[start..end].iter().map(Instance::try_from).collect()
            },
            DEFAULT_PAGE_SIZE,
        )
        .expect("listing succeeds");

        assert_eq!(calls, 3);
        assert_eq!(instances.len(), 250);
        assert_eq!(instances[0].instance_id, "rm-0000");
        assert_eq!(instances[249].instance_id, "rm-0249");
        assert!(instances.iter().all(|i| i.region == "cn-shanghai"));
    }
}
