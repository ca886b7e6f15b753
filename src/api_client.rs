use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::env;
use std::error::Error;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "http://localhost:5197";
const DEFAULT_TIMEOUT: &str = "90s";

/// Shared configuration for the API clients: base URL and request timeout.
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        debug!(
            "ApiClientConfig::new(base_url: {}, timeout: {}s)",
            base_url,
            timeout.as_secs()
        );
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("HTTP_TIMEOUT").unwrap_or_else(|_| DEFAULT_TIMEOUT.to_string());

        Self::new(&base_url, parse_timeout(&timeout)?)
    }
}

/// Parses timeout values like "90s", "2m", "500ms" or a bare number of
/// seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, Box<dyn Error>> {
    let value = value.trim();
    if value.is_empty() {
        return Err("timeout value is empty".into());
    }

    if let Some(millis) = value.strip_suffix("ms") {
        return Ok(Duration::from_millis(millis.parse()?));
    }
    if let Some(secs) = value.strip_suffix('s') {
        return Ok(Duration::from_secs(secs.parse()?));
    }
    if let Some(minutes) = value.strip_suffix('m') {
        return Ok(Duration::from_secs(minutes.parse::<u64>()? * 60));
    }

    Ok(Duration::from_secs(value.parse()?))
}

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// W3C trace-context header value for correlating requests in backend traces.
pub fn new_traceparent() -> String {
    let trace_id = Uuid::new_v4().to_simple().to_string();
    let parent_id = Uuid::new_v4().to_simple().to_string();
    format!("00-{}-{}-01", trace_id, &parent_id[..16])
}

/// Raw outcome of one HTTP request. Transport failures are represented as
/// status 0 with a nonzero error code instead of an Err, so scenario checks
/// stay the single failure-detection path.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub url: String,
    pub status: u16,
    pub body: Option<String>,
    pub duration: Duration,
    pub error_code: u32,
    pub traceparent: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    pub fn has_body(&self) -> bool {
        self.body.as_deref().map_or(false, |body| !body.is_empty())
    }

    /// Parsed JSON body for a 2xx response with a body; `None` otherwise or
    /// on parse failure. Never fails.
    pub fn parse_json_body(&self) -> Option<Value> {
        if !self.is_success() {
            return None;
        }
        let body = self.body.as_deref()?;
        if body.is_empty() {
            return None;
        }
        serde_json::from_str(body).ok()
    }
}

pub(crate) fn transport_error_code(error: &reqwest::Error) -> u32 {
    if error.is_timeout() {
        1211
    } else if error.is_connect() {
        1212
    } else {
        1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    fn response(status: u16, body: Option<&str>) -> ApiResponse {
        ApiResponse {
            url: "http://localhost:5197/Publish".into(),
            status,
            body: body.map(|body| body.to_string()),
            duration: Duration::from_millis(12),
            error_code: 0,
            traceparent: None,
        }
    }

    #[test]
    fn config_trims_trailing_slashes() {
        let_assert!(
            Ok(config) = ApiClientConfig::new("http://localhost:5197///", Duration::from_secs(90))
        );
        check!(config.base_url == "http://localhost:5197");
    }

    #[test]
    fn parse_timeout_supports_common_suffixes() {
        let_assert!(Ok(timeout) = parse_timeout("90s"));
        check!(timeout == Duration::from_secs(90));

        let_assert!(Ok(timeout) = parse_timeout("2m"));
        check!(timeout == Duration::from_secs(120));

        let_assert!(Ok(timeout) = parse_timeout("500ms"));
        check!(timeout == Duration::from_millis(500));

        let_assert!(Ok(timeout) = parse_timeout("45"));
        check!(timeout == Duration::from_secs(45));

        check!(parse_timeout("").is_err());
        check!(parse_timeout("abc").is_err());
    }

    #[test]
    fn parse_json_body_returns_value_for_success_with_json() {
        let_assert!(Some(value) = response(200, Some(r#"{"status":"accepted"}"#)).parse_json_body());
        check!(value["status"] == "accepted");
    }

    #[test]
    fn parse_json_body_returns_none_for_non_success_or_garbage() {
        check!(response(404, Some("not found")).parse_json_body().is_none());
        check!(response(200, Some("not json")).parse_json_body().is_none());
        check!(response(200, None).parse_json_body().is_none());
        check!(response(200, Some("")).parse_json_body().is_none());
    }

    #[test]
    fn traceparent_has_w3c_shape() {
        let traceparent = new_traceparent();
        let parts: Vec<&str> = traceparent.split('-').collect();

        check!(parts.len() == 4);
        check!(parts[0] == "00");
        check!(parts[1].len() == 32);
        check!(parts[2].len() == 16);
        check!(parts[3] == "01");
    }
}
