//! Company operations: CRUD plus the company-scoped listings for users,
//! cash accounts and storages.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::error::Result;

/// Filters for listing companies.
#[derive(Debug, Default, Serialize)]
pub struct CompaniesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderated: Option<bool>,
    #[serde(rename = "forBooking", skip_serializing_if = "Option::is_none")]
    pub for_booking: Option<bool>,
    /// Restrict the listing to companies of the calling user; needs a
    /// user token on the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my: Option<bool>,
}

/// Request for creating a company.
#[derive(Debug, Serialize)]
pub struct CreateCompanyRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// Request for updating a company.
#[derive(Debug, Default, Serialize)]
pub struct UpdateCompanyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl YclientsClient {
    /// List companies; pass a user token when filtering by `my`.
    pub async fn list_companies(
        &self,
        filter: CompaniesFilter,
        user_token: Option<&str>,
    ) -> Result<Value> {
        let auth = match user_token {
            Some(token) => Auth::User(token),
            None => Auth::Partner,
        };
        self.call(Method::GET, "companies", Some(&filter), auth)
            .await
    }

    /// Create a company.
    pub async fn create_company(
        &self,
        request: &CreateCompanyRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(&request.title, "title")?;
        require_text(user_token, "user_token")?;
        self.call(Method::POST, "companies", Some(request), Auth::User(user_token))
            .await
    }

    /// Get company by ID.
    pub async fn get_company(&self, company_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("company/{company_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Update a company.
    pub async fn update_company(
        &self,
        company_id: u64,
        request: &UpdateCompanyRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("company/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Delete company by ID.
    pub async fn delete_company(&self, company_id: u64, user_token: &str) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::DELETE,
            &format!("company/{company_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// List users attached to a company.
    pub async fn list_company_users(&self, company_id: u64, user_token: &str) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("company_users/{company_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// List cash accounts of a company.
    pub async fn list_accounts(&self, company_id: u64, user_token: &str) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("accounts/{company_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// List storages of a company.
    pub async fn list_storages(&self, company_id: u64, user_token: &str) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::GET,
            &format!("storages/{company_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn unroutable_client() -> YclientsClient {
        YclientsClient::new()
            .with_partner_token("t")
            .with_base_url("http://127.0.0.1:1/api/v1")
    }

    #[test]
    fn test_companies_filter_renames_for_booking() {
        let filter = CompaniesFilter {
            for_booking: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, serde_json::json!({ "forBooking": true }));
    }

    #[tokio::test]
    async fn test_create_company_requires_title() {
        let request = CreateCompanyRequest {
            title: "  ".to_string(),
            country_id: None,
            city_id: None,
            address: None,
            phone: None,
            site: None,
        };
        let err = unroutable_client()
            .create_company(&request, "u-token")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "title"));
    }

    #[tokio::test]
    async fn test_delete_company_requires_user_token() {
        let err = unroutable_client()
            .delete_company(4564, "")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "user_token"));
    }
}
