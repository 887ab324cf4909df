//! ArchivesSpace client implementation.

use crate::error::ClientError;
use crate::records::{ArchivalObject, ComponentRef, OrderedRecords, TopContainer};
use crate::session::{login, SESSION_HEADER};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Blocking ArchivesSpace API client
///
/// All calls run sequentially on the caller's thread; the export has no
/// concurrency. Record URIs returned by the API are rooted at the API
/// base (e.g. `/repositories/3/archival_objects/2`), so request URLs are
/// formed by appending them to the configured base URL.
pub struct AspaceClient {
    http: reqwest::blocking::Client,
    base_url: String,
    session: Option<String>,
}

impl AspaceClient {
    /// Create a new client for the given API base URL
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session: None,
        }
    }

    /// Establish a session with the backend
    pub fn connect(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let token = login(&self.http, &self.base_url, username, password)?;
        debug!("session established for user {}", username);
        self.session = Some(token);
        Ok(())
    }

    /// Fetch the ordered descendant list for a resource
    pub fn ordered_records(
        &self,
        repo: u32,
        resource: u32,
    ) -> Result<Vec<ComponentRef>, ClientError> {
        let path = format!("/repositories/{}/resources/{}/ordered_records", repo, resource);
        let records: OrderedRecords = self.get(&path)?;
        Ok(records.uris)
    }

    /// Fetch the full record for a single component
    pub fn archival_object(&self, uri: &str) -> Result<ArchivalObject, ClientError> {
        self.get(uri)
    }

    /// Fetch a top container (box) record
    pub fn top_container(&self, uri: &str) -> Result<TopContainer, ClientError> {
        self.get(uri)
    }

    /// Perform an authenticated GET and deserialize the JSON body
    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let token = self.session.as_ref().ok_or(ClientError::NotConnected)?;
        let url = format!("{}{}", self.base_url, path);

        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header(SESSION_HEADER, token.as_str())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&response.text()?)?)
    }
}
