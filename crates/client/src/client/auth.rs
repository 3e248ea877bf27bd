//! Partner authentication.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient};
use crate::error::Result;

#[derive(Serialize)]
struct AuthRequest<'a> {
    login: &'a str,
    password: &'a str,
}

impl YclientsClient {
    /// Obtain a user token from a login and password.
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<Value> {
        require_text(login, "login")?;
        require_text(password, "password")?;
        let body = AuthRequest { login, password };
        self.call(Method::POST, "auth", Some(&body), Auth::Partner)
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

    #[tokio::test]
    async fn test_authenticate_rejects_empty_login_before_dispatch() {
        let err = unroutable_client()
            .authenticate("", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "login"));
    }

    #[tokio::test]
    async fn test_authenticate_requires_partner_token() {
        let client = YclientsClient::new().with_base_url("http://127.0.0.1:1/api/v1");
        let err = client.authenticate("user", "secret").await.unwrap_err();
        assert!(matches!(err, Error::MissingPartnerToken));
    }
}
