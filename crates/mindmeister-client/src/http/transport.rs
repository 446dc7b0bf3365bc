/*
[INPUT]:  Fully signed request URLs
[OUTPUT]: Raw response bodies
[POS]:    HTTP layer - transport seam around the HTTP client
[UPDATE]: When swapping the HTTP stack or adding transport options
*/

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::client::ClientConfig;
use super::error::Result;

/// Issues a single GET and hands back the body.
///
/// Status codes are not interpreted here; the service reports failures
/// inside the response envelope.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: Url) -> Result<String>;
}

/// Default transport backed by reqwest with rustls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http_client })
    }

    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<String> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        Ok(response.text().await?)
    }
}
