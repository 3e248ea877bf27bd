//! Client (customer) record operations with paginated listing.

use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::error::Result;

/// Filters for the paginated client listing.
#[derive(Debug, Default, Serialize)]
pub struct ClientsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request for creating a client record.
#[derive(Debug, Serialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Request for updating a client record.
#[derive(Debug, Default, Serialize)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl YclientsClient {
    /// List clients of a company, paginated.
    pub async fn list_clients(
        &self,
        company_id: u64,
        filter: ClientsFilter,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("clients/{company_id}"),
            Some(&filter),
            Auth::User(user_token),
        )
        .await
    }

    /// Create a client record.
    pub async fn create_client(
        &self,
        company_id: u64,
        request: &CreateClientRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(&request.name, "name")?;
        require_text(&request.phone, "phone")?;
        require_text(user_token, "user_token")?;
        self.call(
            Method::POST,
            &format!("clients/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Get client by ID.
    pub async fn get_client(
        &self,
        company_id: u64,
        client_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("client/{company_id}/{client_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// Update a client record.
    pub async fn update_client(
        &self,
        company_id: u64,
        client_id: u64,
        request: &UpdateClientRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("client/{company_id}/{client_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Delete client by ID.
    pub async fn delete_client(
        &self,
        company_id: u64,
        client_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::DELETE,
            &format!("client/{company_id}/{client_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }
}
