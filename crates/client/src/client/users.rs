//! End-user operations: phone authentication and user record access.
//!
//! User records are reachable either through the record hash issued at
//! booking time or through a user token; at least one must be supplied.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{require_text, Auth, YclientsClient, NO_PARAMS};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct UserAuthRequest<'a> {
    phone: &'a str,
    code: &'a str,
}

impl YclientsClient {
    /// Obtain a user token from a phone number and verification code.
    pub async fn authenticate_user(&self, phone: &str, code: &str) -> Result<Value> {
        require_text(phone, "phone")?;
        require_text(code, "code")?;
        let body = UserAuthRequest { phone, code };
        self.call(Method::POST, "user/auth", Some(&body), Auth::Partner)
            .await
    }

    /// Get a user's booking record by hash or user token.
    pub async fn get_user_record(
        &self,
        record_id: u64,
        record_hash: Option<&str>,
        user_token: Option<&str>,
    ) -> Result<Value> {
        let (path, auth) = user_record_route(record_id, record_hash, user_token)?;
        self.call(Method::GET, &path, NO_PARAMS, auth).await
    }

    /// Delete a user's booking record by hash or user token.
    pub async fn delete_user_record(
        &self,
        record_id: u64,
        record_hash: Option<&str>,
        user_token: Option<&str>,
    ) -> Result<Value> {
        let (path, auth) = user_record_route(record_id, record_hash, user_token)?;
        self.call(Method::DELETE, &path, NO_PARAMS, auth).await
    }
}

fn user_record_route<'a>(
    record_id: u64,
    record_hash: Option<&str>,
    user_token: Option<&'a str>,
) -> Result<(String, Auth<'a>)> {
    if record_hash.is_none() && user_token.is_none() {
        return Err(Error::validation(
            "record_hash",
            "either a record hash or a user token is required",
        ));
    }
    let path = match record_hash {
        Some(hash) => format!("user/records/{record_id}/{hash}"),
        None => format!("user/records/{record_id}"),
    };
    let auth = match user_token {
        Some(token) => Auth::User(token),
        None => Auth::Partner,
    };
    Ok((path, auth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_requires_hash_or_token() {
        let err = user_record_route(42, None, None).unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "record_hash"));
    }

    #[test]
    fn test_route_with_hash_interpolates_it() {
        let (path, auth) = user_record_route(42, Some("abc123"), None).unwrap();
        assert_eq!(path, "user/records/42/abc123");
        assert!(matches!(auth, Auth::Partner));
    }

    #[test]
    fn test_route_with_token_only_omits_hash_segment() {
        let (path, auth) = user_record_route(42, None, Some("u-token")).unwrap();
        assert_eq!(path, "user/records/42");
        assert!(matches!(auth, Auth::User("u-token")));
    }
}
