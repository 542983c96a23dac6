use std::time::Duration;

use async_trait::async_trait;
use domain::ports::{RawResponse, Transport, TransportError};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;
use url::Url;

/// reqwestによるTransportポートの実装
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<RawResponse, TransportError> {
        debug!("GETリクエストを発行: {} (timeout={:?})", url, timeout);

        let response = self
            .client
            .get(url.as_str())
            .timeout(timeout)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| TransportError::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::RequestError(e.to_string()))?;

        debug!("レスポンスを受信: status={} ({} bytes)", status, body.len());

        Ok(RawResponse {
            status,
            body: Some(body),
        })
    }
}
