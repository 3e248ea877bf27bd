//! Service-category and service operations, plus promotion (event)
//! listings.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::error::{Error, Result};

/// Request for creating a service category.
#[derive(Debug, Serialize)]
pub struct CreateServiceCategoryRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Request for updating a service category.
#[derive(Debug, Default, Serialize)]
pub struct UpdateServiceCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Filters for listing services.
#[derive(Debug, Default, Serialize)]
pub struct ServicesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// Request for creating a service.
#[derive(Debug, Serialize)]
pub struct CreateServiceRequest {
    pub title: String,
    pub category_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
}

/// Request for updating a service.
#[derive(Debug, Default, Serialize)]
pub struct UpdateServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
}

impl YclientsClient {
    /// List service categories of a company.
    pub async fn list_service_categories(&self, company_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("service_categories/{company_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Create a service category.
    pub async fn create_service_category(
        &self,
        company_id: u64,
        request: &CreateServiceCategoryRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(&request.title, "title")?;
        require_text(user_token, "user_token")?;
        self.call(
            Method::POST,
            &format!("service_categories/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Get service category by ID.
    pub async fn get_service_category(&self, company_id: u64, category_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("service_category/{company_id}/{category_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Update a service category.
    pub async fn update_service_category(
        &self,
        company_id: u64,
        category_id: u64,
        request: &UpdateServiceCategoryRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("service_category/{company_id}/{category_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Delete service category by ID.
    pub async fn delete_service_category(
        &self,
        company_id: u64,
        category_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::DELETE,
            &format!("service_category/{company_id}/{category_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// List services of a company.
    pub async fn list_services(&self, company_id: u64, filter: ServicesFilter) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("services/{company_id}"),
            Some(&filter),
            Auth::Partner,
        )
        .await
    }

    /// Get service by ID.
    pub async fn get_service(&self, company_id: u64, service_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("services/{company_id}/{service_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Create a service.
    pub async fn create_service(
        &self,
        company_id: u64,
        request: &CreateServiceRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(&request.title, "title")?;
        if request.category_id == 0 {
            return Err(Error::validation(
                "category_id",
                "must be a positive identifier",
            ));
        }
        require_text(user_token, "user_token")?;
        self.call(
            Method::POST,
            &format!("services/{company_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Update a service.
    pub async fn update_service(
        &self,
        company_id: u64,
        service_id: u64,
        request: &UpdateServiceRequest,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::PUT,
            &format!("services/{company_id}/{service_id}"),
            Some(request),
            Auth::User(user_token),
        )
        .await
    }

    /// Delete service by ID.
    pub async fn delete_service(
        &self,
        company_id: u64,
        service_id: u64,
        user_token: &str,
    ) -> Result<Value> {
        require_text(user_token, "user_token")?;
        self.call(
            Method::DELETE,
            &format!("services/{company_id}/{service_id}"),
            NO_PARAMS,
            Auth::User(user_token),
        )
        .await
    }

    /// List promotions (events) of a company.
    pub async fn list_events(&self, company_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("events/{company_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }

    /// Get promotion (event) by ID.
    pub async fn get_event(&self, company_id: u64, event_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("events/{company_id}/{event_id}"),
            NO_PARAMS,
            Auth::Partner,
        )
        .await
    }
}
