//! Appointment-record operations: CRUD with date-range and
//! change-tracking filters, and comment retrieval.

use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::error::{Error, Result};

/// Filters for the paginated record listing.
///
/// `start_date`/`end_date` bound the appointment date, the `c_` pair
/// bounds the creation date, and `changed_after`/`changed_before` track
/// modifications for incremental synchronization.
#[derive(Debug, Default, Serialize)]
pub struct RecordsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_after: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_before: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_deleted: Option<bool>,
}

/// Client payload embedded in a record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordClient {
    pub phone: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request for creating an appointment record.
#[derive(Debug, Serialize)]
pub struct CreateRecordRequest {
    pub staff_id: u64,
    pub services: Vec<u64>,
    pub client: RecordClient,
    pub datetime: DateTime<FixedOffset>,
    /// Seance length in seconds.
    pub seance_length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_if_busy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// SMS reminder lead time, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_remain_hours: Option<u32>,
    /// Email reminder lead time, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_remain_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
}

/// Request for updating an appointment record.
#[derive(Debug, Default, Serialize)]
pub struct UpdateRecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<RecordClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seance_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Attendance mark: -1 no-show, 0 pending, 1 arrived, 2 confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<i8>,
}

/// Filters for listing comments.
#[derive(Debug, Default, Serialize)]
pub struct CommentsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

fn validate_record(request: &CreateRecordRequest) -> Result<()> {
    if request.staff_id == 0 {
        return Err(Error::validation("staff_id", "must be a positive identifier"));
    }
    if request.services.is_empty() {
        return Err(Error::validation(
            "services",
            "must contain at least one service",
        ));
    }
    require_text(&request.client.phone, "client.phone")?;
    require_text(&request.client.name, "client.name")?;
    Ok(())
}

impl YclientsClient {
    /// List appointment records of a company.
    pub async fn list_records(
        &self,
        company_id: u64,
        filter: RecordsFilter,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("records/{company_id}"),
            Some(&filter),
            Auth::User(user_token),
        )
        .await
    }

    /// Create an appointment record.
    pub async fn create_record(
        &self,
        company_id: u64,
        request: &CreateRecordRequest,
        user_token: &str,
    ) -> Result<Value> {
        validate_record(request)?;
        require_text(user_token, "user_token")?;
        self.call(
            Method::POST,
            &format!("records/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Get appointment record by ID.
    pub async fn get_record(
        &self,
        company_id: u64,
        record_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("record/{company_id}/{record_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// Update an appointment record.
    pub async fn update_record(
        &self,
        company_id: u64,
        record_id: u64,
        request: &UpdateRecordRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("record/{company_id}/{record_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Delete appointment record by ID.
    pub async fn delete_record(
        &self,
        company_id: u64,
        record_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::DELETE,
            &format!("record/{company_id}/{record_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// List comments left for a company or its staff.
    pub async fn list_comments(&self, company_id: u64, filter: CommentsFilter) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("comments/{company_id}"),
            Some(&filter),
            Auth::Partner,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_datetime;

    fn record() -> CreateRecordRequest {
        CreateRecordRequest {
            staff_id: 5,
            services: vec![13],
            client: RecordClient {
                phone: "79161502239".to_string(),
                name: "A B".to_string(),
                email: None,
            },
            datetime: parse_datetime("2015-09-29T13:00:00+04:00").unwrap(),
            seance_length: 3600,
            save_if_busy: None,
            send_sms: None,
            comment: None,
            sms_remain_hours: None,
            email_remain_hours: None,
            api_id: None,
        }
    }

    #[test]
    fn test_validate_record_rejects_empty_services() {
        let mut request = record();
        request.services.clear();
        let err = validate_record(&request).unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "services"));
    }

    #[test]
    fn test_validate_record_names_nested_client_field() {
        let mut request = record();
        request.client.phone = String::new();
        let err = validate_record(&request).unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "client.phone"));
    }

    #[test]
    fn test_records_filter_serializes_dates_as_plain_text() {
        let filter = RecordsFilter {
            start_date: Some("2015-09-01".parse().unwrap()),
            changed_after: Some(parse_datetime("2015-09-29T13:00:00+04:00").unwrap()),
            ..Default::default()
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["start_date"], "2015-09-01");
        assert_eq!(value["changed_after"], "2015-09-29T13:00:00+04:00");
        assert!(value.get("end_date").is_none());
    }
}
