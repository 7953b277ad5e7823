//! Typed endpoint surface
//!
//! One file per service area, all methods on [`ApiClient`].

mod admin;
mod auth;
mod billing;
mod menu;
mod orders;

use crate::config::ClientConfig;
use crate::http::HttpClient;
use crate::ClientResult;

/// API client for the POS service
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = HttpClient::new(&config.base_url, config.timeout)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Install or drop the bearer token used on every request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }
}
