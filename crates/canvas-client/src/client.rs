//! Canvas REST client.
//!
//! One authenticated GET per call, no retries and no client-side timeout.
//! Callers depend on the [`CanvasApi`] trait so handlers can be exercised
//! without a live Canvas instance.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CanvasConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;

/// Read access to the Canvas REST API.
#[async_trait]
pub trait CanvasApi: std::fmt::Debug + Send + Sync {
    /// Issue a GET and return the parsed JSON body verbatim.
    ///
    /// Non-2xx responses become [`ClientError::ApiError`] carrying the status
    /// and the full response body text.
    async fn get(&self, request: &ApiRequest) -> ClientResult<Value>;
}

/// reqwest-backed [`CanvasApi`] implementation.
#[derive(Debug, Clone)]
pub struct CanvasClient {
    http: reqwest::Client,
    config: CanvasConfig,
}

impl CanvasClient {
    /// Build a client for the configured Canvas instance.
    pub fn new(config: &CanvasConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("canvas-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl CanvasApi for CanvasClient {
    async fn get(&self, request: &ApiRequest) -> ClientResult<Value> {
        let url = request.resolve(self.config.base_url())?;
        debug!(path = %request, "GET Canvas API");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.config.access_token())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(path = %request, status = status.as_u16(), "Canvas API returned an error");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
