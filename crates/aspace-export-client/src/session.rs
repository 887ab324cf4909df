//! Session establishment against the ArchivesSpace backend.

use crate::error::ClientError;
use serde::Deserialize;

/// Header carrying the session token on authenticated requests
pub(crate) const SESSION_HEADER: &str = "X-ArchivesSpace-Session";

/// Login response from the backend
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    /// Session token for subsequent requests
    pub session: String,
}

/// Log in and return a session token
///
/// ArchivesSpace authenticates with
/// `POST /users/{username}/login?password=...`; the response carries the
/// token in its `session` field.
pub(crate) fn login(
    http: &reqwest::blocking::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String, ClientError> {
    let url = format!("{}/users/{}/login", base_url, username);

    let response = http
        .post(&url)
        .query(&[("password", password)])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::Auth(format!("HTTP {}: {}", status, message)));
    }

    let login_response: LoginResponse = serde_json::from_str(&response.text()?)?;

    if login_response.session.is_empty() {
        return Err(ClientError::Session("Empty session token".to_string()));
    }

    Ok(login_response.session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parsing() {
        let json = r#"{
            "session": "9528190655b44567f2dbbf7d4b5b98a3caef2ecdbecd9ddd3af77a0420b61073",
            "user": {"username": "admin", "name": "Administrator"}
        }"#;

        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.session,
            "9528190655b44567f2dbbf7d4b5b98a3caef2ecdbecd9ddd3af77a0420b61073"
        );
    }
}
