//! Online booking operations: form configuration, localization, the
//! four-stage discovery flow (services, staff, dates, times), phone
//! verification and booking record creation.

use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::dates::format_date;
use crate::error::{Error, Result};

/// Filters for listing services available for booking.
#[derive(Debug, Default, Serialize)]
pub struct BookServicesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<u64>>,
}

/// Filters for listing staff available for booking.
#[derive(Debug, Default, Serialize)]
pub struct BookStaffFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<u64>>,
    /// Include staff without free seances instead of filtering them out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_seances: Option<bool>,
}

/// Filters for listing dates available for booking.
#[derive(Debug, Default, Serialize)]
pub struct BookDatesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<u64>>,
}

/// Filters for listing time slots available for booking.
#[derive(Debug, Default, Serialize)]
pub struct BookTimesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<u64>>,
}

/// One appointment entry of a composite booking payload.
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    /// Caller-chosen identifier echoed back in the service's response.
    pub id: u64,
    pub staff_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u64>>,
    pub datetime: DateTime<FixedOffset>,
}

/// Person and appointment payload for creating a booking record.
#[derive(Debug, Clone, Serialize)]
pub struct BookRecordRequest {
    pub phone: String,
    pub fullname: String,
    pub email: String,
    pub appointments: Vec<Appointment>,
    /// Verification code previously delivered via `send_book_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// SMS reminder lead time, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_by_sms: Option<u32>,
    /// Email reminder lead time, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_by_email: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
}

#[derive(Serialize)]
struct BookCodeRequest<'a> {
    phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fullname: Option<&'a str>,
}

#[derive(Serialize)]
struct BookCheckRequest<'a> {
    appointments: &'a [Appointment],
}

/// Check a composite appointment list before transmission. Names the
/// offending entry and field so the caller can fix the payload.
pub(crate) fn validate_appointments(appointments: &[Appointment]) -> Result<()> {
    if appointments.is_empty() {
        return Err(Error::validation(
            "appointments",
            "must contain at least one entry",
        ));
    }
    for (index, appointment) in appointments.iter().enumerate() {
        if appointment.id == 0 {
            return Err(Error::validation(
                format!("appointments[{index}].id"),
                "must be a positive identifier",
            ));
        }
        if appointment.staff_id == 0 {
            return Err(Error::validation(
                format!("appointments[{index}].staff_id"),
                "must be a positive identifier",
            ));
        }
    }
    Ok(())
}

impl YclientsClient {
    /// Get the booking form configuration.
    pub async fn get_bookform(&self, form_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("bookform/{form_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Get the localization bundle for a locale such as `ru-RU` or `en-US`.
    pub async fn get_i18n(&self, locale: &str) -> Result<Value> {
        require_text(locale, "locale")?;
        self.call(
            Method::GET,
            &format!("i18n/{locale}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// List services available for booking.
    pub async fn get_book_services(
        &self,
        company_id: u64,
        filter: BookServicesFilter,
    ) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("book_services/{company_id}"),
            Some(&filter),
            Auth::Partner,
        )
        .await
    }

    /// List staff available for booking.
    pub async fn get_book_staff(&self, company_id: u64, filter: BookStaffFilter) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("book_staff/{company_id}"),
            Some(&filter),
            Auth::Partner,
        )
        .await
    }

    /// List dates available for booking.
    pub async fn get_book_dates(&self, company_id: u64, filter: BookDatesFilter) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("book_dates/{company_id}"),
            Some(&filter),
            Auth::Partner,
        )
        .await
    }

    /// List time slots available for booking on a given date.
    pub async fn get_book_times(
        &self,
        company_id: u64,
        staff_id: u64,
        date: NaiveDate,
        filter: BookTimesFilter,
    ) -> Result<Value> {
        let path = format!("book_times/{company_id}/{staff_id}/{}", format_date(date));
        self.call(Method::GET, &path, Some(&filter), Auth::Partner)
            .await
    }

    /// Send a phone verification code to a prospective client.
    pub async fn send_book_code(
        &self,
        company_id: u64,
        phone: &str,
        fullname: Option<&str>,
    ) -> Result<Value> {
        require_text(phone, "phone")?;
        let body = BookCodeRequest { phone, fullname };
        self.call(
            Method::POST,
            &format!("book_code/{company_id}"),
            Some(&body),
            Auth::Partner,
        )
        .await
    }

    /// Pre-check appointment entries for conflicts before booking.
    pub async fn check_book_appointments(
        &self,
        company_id: u64,
        appointments: &[Appointment],
    ) -> Result<Value> {
        validate_appointments(appointments)?;
        let body = BookCheckRequest { appointments };
        self.call(
            Method::POST,
            &format!("book_check/{company_id}"),
            Some(&body),
            Auth::Partner,
        )
        .await
    }

    /// Create a booking record from a person payload and appointments.
    pub async fn create_book_record(
        &self,
        company_id: u64,
        request: &BookRecordRequest,
    ) -> Result<Value> {
        require_text(&request.phone, "phone")?;
        require_text(&request.fullname, "fullname")?;
        require_text(&request.email, "email")?;
        validate_appointments(&request.appointments)?;
        self.call(
            Method::POST,
            &format!("book_record/{company_id}"),
            Some(request),
            Auth::Partner,
        )
        .await
    }
}
