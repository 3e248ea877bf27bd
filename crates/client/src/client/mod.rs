//! HTTP client for the yclients booking API.

pub mod auth;
pub mod booking;
pub mod clients;
pub mod companies;
pub mod records;
pub mod services;
pub mod sms;
pub mod staff;
pub mod users;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.yclients.com/api/v1";

/// Versioned media type the service expects on every request.
const ACCEPT_MEDIA_TYPE: &str = "application/vnd.yclients.v2+json";

/// Placeholder for operations that send no parameters.
pub(crate) const NO_PARAMS: Option<&()> = None;

/// Authentication requirement of a single operation.
///
/// Every operation needs the partner bearer token; user-scoped operations
/// additionally carry a per-call user token, appended to the same header
/// as `Bearer <partner>, User <user>`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Auth<'a> {
    Partner,
    User(&'a str),
}

/// HTTP client for the yclients API.
///
/// Holds no mutable state: the partner token is fixed at construction and
/// every request is built fresh, so a single instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone)]
pub struct YclientsClient {
    http: reqwest::Client,
    base_url: String,
    partner_token: Option<String>,
}

impl Default for YclientsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YclientsClient {
    /// Create a client against the production API root, without a partner
    /// token. Operations requiring authentication will fail fast until a
    /// token is supplied via [`with_partner_token`](Self::with_partner_token).
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            partner_token: None,
        }
    }

    /// Set the partner bearer token.
    pub fn with_partner_token(mut self, token: impl Into<String>) -> Self {
        self.partner_token = Some(token.into());
        self
    }

    /// Override the API root (primarily for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build a fully-formed request for one operation.
    ///
    /// GET parameters become a URL query string (array values repeat the
    /// key); other methods carry a JSON body. `None` parameters produce
    /// neither a query string nor a body.
    pub(crate) fn build_request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: Option<&T>,
        auth: Auth<'_>,
    ) -> Result<reqwest::Request> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));

        let partner = self
            .partner_token
            .as_deref()
            .ok_or(Error::MissingPartnerToken)?;
        let authorization = match auth {
            Auth::Partner => format!("Bearer {partner}"),
            Auth::User(user) => format!("Bearer {partner}, User {user}"),
        };
        let authorization = HeaderValue::from_str(&authorization)
            .map_err(|_| Error::validation("token", "contains characters invalid in a header"))?;
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = self
            .http
            .request(method.clone(), self.url(path))
            .headers(headers);
        if let Some(params) = params {
            if method == Method::GET {
                let pairs = query_pairs(params)?;
                if !pairs.is_empty() {
                    builder = builder.query(&pairs);
                }
            } else {
                builder = builder.json(params);
            }
        }
        builder.build().map_err(Error::from)
    }

    /// Execute a request and decode the response.
    pub(crate) async fn send(&self, request: reqwest::Request) -> Result<Value> {
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");
        let response = self.http.execute(request).await?;
        handle_response(response).await
    }

    /// Build and dispatch in one step; the shape every endpoint reduces to.
    pub(crate) async fn call<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: Option<&T>,
        auth: Auth<'_>,
    ) -> Result<Value> {
        let request = self.build_request(method, path, params, auth)?;
        self.send(request).await
    }
}

/// Triage a response: non-2xx statuses surface as `Api`, success bodies
/// are decoded as JSON and returned verbatim.
async fn handle_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(Error::from)
}

/// Flatten a parameter mapping into query pairs.
///
/// Arrays repeat the key (`service_ids=1&service_ids=2`); nulls are
/// dropped; nested objects are not representable in a query string.
fn query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => {
            return Err(Error::validation(
                "parameters",
                "expected a key-value mapping",
            ))
        }
    };
    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in &items {
                    pairs.push((key.clone(), scalar_to_string(&key, item)?));
                }
            }
            other => {
                let rendered = scalar_to_string(&key, &other)?;
                pairs.push((key, rendered));
            }
        }
    }
    Ok(pairs)
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::validation(
            key,
            "nested structures cannot be encoded in a query string",
        )),
    }
}

/// Reject empty or whitespace-only values for a required text field.
pub(crate) fn require_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn client() -> YclientsClient {
        YclientsClient::new()
            .with_partner_token("partner-token")
            .with_base_url("http://api.test/api/v1")
    }

    fn body_bytes(request: &reqwest::Request) -> &[u8] {
        request.body().unwrap().as_bytes().unwrap()
    }

    #[test]
    fn test_get_request_shape() {
        let mut params = HashMap::new();
        params.insert("a", serde_json::json!(1));
        params.insert("b", serde_json::json!("x"));
        let req = client()
            .build_request(Method::GET, "book_services/4564", Some(&params), Auth::Partner)
            .unwrap();

        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url().path(), "/api/v1/book_services/4564");
        let query: HashMap<String, String> = req
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(query["a"], "1");
        assert_eq!(query["b"], "x");
        assert!(req.body().is_none());
    }

    #[test]
    fn test_get_without_params_has_no_query() {
        let req = client()
            .build_request(Method::GET, "staff/4564", NO_PARAMS, Auth::Partner)
            .unwrap();
        assert_eq!(req.url().query(), None);
        assert!(req.body().is_none());
    }

    #[test]
    fn test_get_array_params_repeat_the_key() {
        let mut params = HashMap::new();
        params.insert("service_ids", vec![1, 7]);
        let req = client()
            .build_request(Method::GET, "book_dates/1", Some(&params), Auth::Partner)
            .unwrap();
        let pairs: Vec<(String, String)> = req
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("service_ids".to_string(), "1".to_string()),
                ("service_ids".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_post_request_carries_json_body() {
        let mut params = HashMap::new();
        params.insert("a", serde_json::json!(1));
        params.insert("b", serde_json::json!("x"));
        let req = client()
            .build_request(Method::POST, "auth", Some(&params), Auth::Partner)
            .unwrap();

        assert_eq!(req.url().query(), None);
        let body: serde_json::Value = serde_json::from_slice(body_bytes(&req)).unwrap();
        assert_eq!(body["a"], 1);
        assert_eq!(body["b"], "x");
    }

    #[test]
    fn test_post_without_params_has_no_body() {
        let req = client()
            .build_request(Method::POST, "auth", NO_PARAMS, Auth::Partner)
            .unwrap();
        assert!(req.body().is_none());
    }

    #[test]
    fn test_headers_pin_media_type_and_bearer() {
        let req = client()
            .build_request(Method::GET, "bookform/1", NO_PARAMS, Auth::Partner)
            .unwrap();
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers()[ACCEPT], "application/vnd.yclients.v2+json");
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer partner-token");
    }

    #[test]
    fn test_user_token_augments_bearer() {
        let req = client()
            .build_request(Method::GET, "clients/1", NO_PARAMS, Auth::User("user-token"))
            .unwrap();
        assert_eq!(
            req.headers()[AUTHORIZATION],
            "Bearer partner-token, User user-token"
        );
    }

    #[test]
    fn test_missing_partner_token_fails_before_any_io() {
        let client = YclientsClient::new().with_base_url("http://api.test/api/v1");
        let err = client
            .build_request(Method::GET, "bookform/1", NO_PARAMS, Auth::Partner)
            .unwrap_err();
        assert!(matches!(err, Error::MissingPartnerToken));
    }

    #[test]
    fn test_identical_inputs_build_identical_requests() {
        let c = client();
        let mut params = HashMap::new();
        params.insert("staff_id", serde_json::json!(5));
        params.insert("datetime", serde_json::json!("2015-09-29T13:00:00+04:00"));

        let a = c
            .build_request(Method::POST, "book_check/1", Some(&params), Auth::Partner)
            .unwrap();
        let b = c
            .build_request(Method::POST, "book_check/1", Some(&params), Auth::Partner)
            .unwrap();
        assert_eq!(a.url(), b.url());
        assert_eq!(a.headers(), b.headers());
        assert_eq!(body_bytes(&a), body_bytes(&b));
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_stripped() {
        let c = YclientsClient::new()
            .with_partner_token("t")
            .with_base_url("http://api.test/api/v1/");
        let req = c
            .build_request(Method::GET, "bookform/1", NO_PARAMS, Auth::Partner)
            .unwrap();
        assert_eq!(req.url().as_str(), "http://api.test/api/v1/bookform/1");
    }

    #[tokio::test]
    async fn test_handle_response_decodes_success_json() {
        let response = http::Response::builder()
            .status(200)
            .body(r#"{"success":true,"data":[1,2]}"#)
            .unwrap();
        let value = handle_response(reqwest::Response::from(response))
            .await
            .unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"][1], 2);
    }

    #[tokio::test]
    async fn test_handle_response_surfaces_remote_error() {
        let response = http::Response::builder()
            .status(422)
            .body(r#"{"errors":{"phone":"required"}}"#)
            .unwrap();
        let err = handle_response(reqwest::Response::from(response))
            .await
            .unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("phone"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_response_rejects_malformed_success_body() {
        let response = http::Response::builder()
            .status(200)
            .body("not json")
            .unwrap();
        let err = handle_response(reqwest::Response::from(response))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
