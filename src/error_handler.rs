use crate::api_client::ApiResponse;
use metrics::counter;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::error;

const MAX_BODY_LOG_LENGTH: usize = 500;

/// Cap on tag values forwarded to the metrics pipeline, to keep cardinality
/// and backend limits in check.
const MAX_TAG_VALUE_LENGTH: usize = 200;

/// Structured failure context handed to the reporting callback.
#[derive(Clone, Serialize, Debug)]
pub struct ErrorData {
    pub url: String,
    pub status: u16,
    pub error_code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceparent: Option<String>,
    /// Response body for 4xx responses (truncated), to help debug validation
    /// errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    #[serde(flatten)]
    pub tags: BTreeMap<String, String>,
}

type LogErrorDetails = Box<dyn Fn(&ErrorData) + Send + Sync>;

/// Records error details via a configurable callback. Use after checks to
/// report failed requests to the console or a metrics counter.
pub struct ErrorHandler {
    log_error_details: LogErrorDetails,
}

impl ErrorHandler {
    /// Reporter that logs error data as a JSON line.
    pub fn console_logger() -> Self {
        Self::custom_logger(|error_data| {
            let json = serde_json::to_string(error_data)
                .unwrap_or_else(|_| format!("{:?}", error_data));
            error!("{}", json);
        })
    }

    /// Reporter that increments the `http_errors` counter with the error data
    /// as labels. Values are truncated; the response body is excluded.
    pub fn metric_logger() -> Self {
        Self::custom_logger(|error_data| {
            let mut labels = vec![
                metrics::Label::new("url", truncate(&error_data.url, MAX_TAG_VALUE_LENGTH)),
                metrics::Label::new("status", error_data.status.to_string()),
                metrics::Label::new("error_code", error_data.error_code.to_string()),
            ];
            if let Some(traceparent) = &error_data.traceparent {
                labels.push(metrics::Label::new(
                    "traceparent",
                    truncate(traceparent, MAX_TAG_VALUE_LENGTH),
                ));
            }
            for (key, value) in &error_data.tags {
                labels.push(metrics::Label::new(
                    key.clone(),
                    truncate(value, MAX_TAG_VALUE_LENGTH),
                ));
            }
            counter!("http_errors", labels).increment(1);
        })
    }

    pub fn custom_logger<F>(log_error_details: F) -> Self
    where
        F: Fn(&ErrorData) + Send + Sync + 'static,
    {
        Self {
            log_error_details: Box::new(log_error_details),
        }
    }

    /// Builds error data from the response and invokes the callback when
    /// `is_error` is set; a no-op otherwise.
    pub fn log_error(
        &self,
        is_error: bool,
        response: &ApiResponse,
        tags: &HashMap<String, String>,
    ) {
        if !is_error {
            return;
        }

        let response_body = match (&response.body, response.status) {
            (Some(body), 400..=499) => Some(truncate_body(body)),
            _ => None,
        };

        let error_data = ErrorData {
            url: response.url.clone(),
            status: response.status,
            error_code: response.error_code,
            traceparent: response.traceparent.clone(),
            response_body,
            tags: tags
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        };

        (self.log_error_details)(&error_data);
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        format!("{}...", value.chars().take(max).collect::<String>())
    }
}

fn truncate_body(body: &str) -> String {
    let total = body.chars().count();
    if total <= MAX_BODY_LOG_LENGTH {
        body.to_string()
    } else {
        format!(
            "{}... (truncated, total {} chars)",
            body.chars().take(MAX_BODY_LOG_LENGTH).collect::<String>(),
            total
        )
    }
}
