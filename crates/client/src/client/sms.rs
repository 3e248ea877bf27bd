//! Notification operations: SMS dispatch and webhook settings.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct SmsRequest<'a> {
    client_ids: &'a [u64],
    text: &'a str,
}

/// Webhook notification settings. Both `url` and `active` are mandatory
/// on update; the per-entity switches are merged only when set.
#[derive(Debug, Serialize)]
pub struct HooksSettingsRequest {
    pub url: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_category: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<bool>,
}

impl YclientsClient {
    /// Send an SMS to a list of clients.
    pub async fn send_sms(
        &self,
        company_id: u64,
        client_ids: &[u64],
        text: &str,
        user_token: &str,
    ) -> Result<Value> {
        if client_ids.is_empty() {
            return Err(Error::validation(
                "client_ids",
                "must contain at least one client",
            ));
        }
        require_text(text, "text")?;
        require_text(user_token, "user_token")?;
        let body = SmsRequest { client_ids, text };
        self.call(
            Method::POST,
            &format!("sms/clients/by_id/{company_id}"),
            Some(&body),
            Auth::User(user_token),
        )
        .await
    }

    /// Get webhook notification settings of a company.
    pub async fn get_hooks_settings(&self, company_id: u64, user_token: &str) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("hooks_settings/{company_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// Update webhook notification settings of a company.
    pub async fn update_hooks_settings(
        &self,
        company_id: u64,
        request: &HooksSettingsRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(&request.url, "url")?;
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("hooks_settings/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }
}
