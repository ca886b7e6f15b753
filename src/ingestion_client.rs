use crate::api_client::{
    default_headers, new_traceparent, transport_error_code, ApiClientConfig, ApiResponse,
};
use crate::model::MeterPayload;
use crate::wire::to_publish_body;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::time::Instant;
use tracing::debug;

/// Parsed body plus the raw response, so callers can run checks against
/// status and timing directly.
#[derive(Clone, Debug)]
pub struct PublishResult {
    pub data: Option<Value>,
    pub response: ApiResponse,
}

/// Client seam for ingestion scenarios, so tests can publish against a
/// double instead of a live endpoint.
#[async_trait]
pub trait PublishClient {
    async fn publish(
        &self,
        payload: &MeterPayload,
        tags: Option<&HashMap<String, String>>,
    ) -> PublishResult;
}

/// Publishes meter payloads to POST {base_url}/Publish in the wire format.
pub struct IngestionClient {
    config: ApiClientConfig,
    http: reqwest::Client,
}

impl IngestionClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::Client::builder()
            .default_headers(default_headers())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::new(ApiClientConfig::from_env()?)
    }
}

#[async_trait]
impl PublishClient for IngestionClient {
    /// Never errors: transport failures come back as a synthetic response
    /// with status 0 and a nonzero error code; non-2xx, empty or unparseable
    /// bodies yield `data: None`.
    async fn publish(
        &self,
        payload: &MeterPayload,
        tags: Option<&HashMap<String, String>>,
    ) -> PublishResult {
        let url = format!("{}/Publish", self.config.base_url);
        let traceparent = new_traceparent();
        let body = to_publish_body(payload);

        debug!(
            "Publishing payload {} to {} (tags: {:?})",
            payload.key, url, tags
        );

        let started_at = Instant::now();
        let result = self
            .http
            .post(&url)
            .header("traceparent", traceparent.as_str())
            .json(&body)
            .send()
            .await;

        let response = match result {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.ok();
                ApiResponse {
                    url,
                    status,
                    body,
                    duration: started_at.elapsed(),
                    error_code: 0,
                    traceparent: Some(traceparent),
                }
            }
            Err(error) => ApiResponse {
                url,
                status: 0,
                body: None,
                duration: started_at.elapsed(),
                error_code: transport_error_code(&error),
                traceparent: Some(traceparent),
            },
        };

        PublishResult {
            data: response.parse_json_body(),
            response,
        }
    }
}
