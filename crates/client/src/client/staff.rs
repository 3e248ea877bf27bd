//! Staff operations: CRUD, working-schedule updates and timetable
//! listings.

use chrono::{NaiveDate, NaiveTime};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::dates::format_date;
use crate::error::{Error, Result};

/// Request for creating a staff member.
#[derive(Debug, Serialize)]
pub struct CreateStaffRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request for updating a staff member.
#[derive(Debug, Default, Serialize)]
pub struct UpdateStaffRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// One working interval within a schedule day.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSlot {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

/// Working slots for one date. An empty slot list marks a day off.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub slots: Vec<ScheduleSlot>,
}

#[derive(Serialize)]
struct ScheduleUpdateRequest<'a> {
    schedules: &'a [ScheduleDay],
}

fn validate_schedule(schedule: &[ScheduleDay]) -> Result<()> {
    if schedule.is_empty() {
        return Err(Error::validation(
            "schedule",
            "must contain at least one day",
        ));
    }
    for (day_index, day) in schedule.iter().enumerate() {
        for (slot_index, slot) in day.slots.iter().enumerate() {
            if slot.from >= slot.to {
                return Err(Error::validation(
                    format!("schedule[{day_index}].slots[{slot_index}]"),
                    "interval start must precede its end",
                ));
            }
        }
    }
    Ok(())
}

impl YclientsClient {
    /// List staff of a company.
    pub async fn list_staff(&self, company_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("staff/{company_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Get staff member by ID.
    pub async fn get_staff(&self, company_id: u64, staff_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("staff/{company_id}/{staff_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Create a staff member.
    pub async fn create_staff(
        &self,
        company_id: u64,
        request: &CreateStaffRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(&request.name, "name")?;
        require_text(user_token, "user_token")?;
        self.call(
            Method::POST,
            &format!("staff/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Update a staff member.
    pub async fn update_staff(
        &self,
        company_id: u64,
        staff_id: u64,
        request: &UpdateStaffRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("staff/{company_id}/{staff_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Delete staff member by ID.
    pub async fn delete_staff(
        &self,
        company_id: u64,
        staff_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::DELETE,
            &format!("staff/{company_id}/{staff_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// Replace a staff member's working schedule for the given days.
    pub async fn update_schedule(
        &self,
        company_id: u64,
        staff_id: u64,
        schedule: &[ScheduleDay],
        user_token: &str,
    ) -> Result<Value> {
        validate_schedule(schedule)?;
        require_text(user_token, "user_token")?;
        let body = ScheduleUpdateRequest { schedules: schedule };
        self.call(
            Method::PUT,
            &format!("schedule/{company_id}/{staff_id}"),
            Some(&body),
            Auth::User(user_token),
        )
        .await
    }

    /// List bookable dates of a staff member's timetable.
    pub async fn list_timetable_dates(
        &self,
        company_id: u64,
        staff_id: u64,
        date: NaiveDate,
    ) -> Result<Value> {
        let path = format!(
            "timetable/dates/{company_id}/{staff_id}/{}",
            format_date(date)
        );
        self.call(Method::GET, &path, NO_PARAMS, Auth::Partner).await
    }

    /// List free seances of a staff member's timetable on a date.
    pub async fn list_timetable_seances(
        &self,
        company_id: u64,
        staff_id: u64,
        date: NaiveDate,
    ) -> Result<Value> {
        let path = format!(
            "timetable/seances/{company_id}/{staff_id}/{}",
            format_date(date)
        );
        self.call(Method::GET, &path, NO_PARAMS, Auth::Partner).await
    }
}
