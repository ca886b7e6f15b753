use crate::api_client::{
    default_headers, new_traceparent, transport_error_code, ApiClientConfig, ApiResponse,
};
use serde_json::Value;
use std::error::Error;
use std::time::Instant;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct GetHealthResult {
    pub data: Option<Value>,
    pub response: ApiResponse,
}

/// GETs the service health endpoint.
pub struct HealthClient {
    config: ApiClientConfig,
    http: reqwest::Client,
}

impl HealthClient {
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

    /// GET {base_url}{path}; a missing leading slash is added. Same result
    /// shape as publish so the scenario checks apply unchanged.
    pub async fn get_health(&self, path: &str) -> GetHealthResult {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        let url = format!("{}{}", self.config.base_url, path);
        let traceparent = new_traceparent();

        debug!("Requesting health at {}", url);

        let started_at = Instant::now();
        let result = self
            .http
            .get(&url)
            .header("traceparent", traceparent.as_str())
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

        GetHealthResult {
            data: response.parse_json_body(),
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> HealthClient {
        let config = ApiClientConfig::new(base_url, Duration::from_secs(5)).unwrap();
        HealthClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn get_health_parses_healthy_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"healthy"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server.uri()).get_health("/health").await;

        check!(result.response.status == 200);
        let_assert!(Some(data) = result.data);
        check!(data["status"] == "healthy");
    }

    #[tokio::test]
    async fn get_health_normalizes_missing_leading_slash() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server.uri()).get_health("healthz").await;

        check!(result.response.status == 200);
        check!(result.response.url.ends_with("/healthz"));
    }
}
