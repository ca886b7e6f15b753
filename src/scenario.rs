use crate::api_client::ApiResponse;
use crate::builder::BuilderRegistry;
use crate::error_handler::ErrorHandler;
use crate::generate::{
    electricity_example_payload, gas_example_payload, generate_meter_payload,
};
use crate::health_client::HealthClient;
use crate::ingestion_client::PublishClient;
use crate::model::{MeterPayload, MeterType};
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;
use tracing::debug;

/// Runtime-supplied identity of one iteration: which simulated client is
/// running and how many iterations it has done.
#[derive(Clone, Copy, Debug)]
pub struct IterationContext {
    pub vu_id: u64,
    pub iter_id: u64,
}

/// Per-scenario configuration. Without an error handler, failed checks are
/// recorded but not reported anywhere.
pub struct ScenarioOptions {
    pub error_handler: Option<ErrorHandler>,
    pub tags: HashMap<String, String>,
    pub meter_type: Option<MeterType>,
    /// Latency budget for the response-time check.
    pub max_duration: Duration,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            error_handler: None,
            tags: HashMap::new(),
            meter_type: None,
            max_duration: Duration::from_millis(1000),
        }
    }
}

/// One named boolean assertion against a response.
#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
}

/// Checks recorded for one iteration. A failed check never aborts the
/// iteration; it is recorded and the run continues.
#[derive(Clone, Debug, Default)]
pub struct CheckSet {
    outcomes: Vec<CheckOutcome>,
}

impl CheckSet {
    pub fn record(&mut self, name: &'static str, passed: bool) -> bool {
        if !passed {
            debug!("Check failed: {}", name);
        }
        self.outcomes.push(CheckOutcome { name, passed });
        passed
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }
}

fn run_publish_checks(
    response: &ApiResponse,
    data: Option<&Value>,
    max_duration: Duration,
) -> CheckSet {
    let mut checks = CheckSet::default();
    checks.record("status is 2xx", response.is_success());
    checks.record("response has body", response.has_body());
    checks.record(
        "response time under threshold",
        response.duration < max_duration,
    );
    if response.is_success() {
        // A 2xx response whose body fails to parse counts as a failed check.
        checks.record("response is valid JSON", data.is_some());
    }
    checks
}

fn merged_tags(
    defaults: &[(&str, &str)],
    extra: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut tags: HashMap<String, String> = defaults
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    for (key, value) in extra {
        tags.insert(key.clone(), value.clone());
    }
    tags
}

/// Generic publish + checks + optional error reporting for one iteration.
/// No retries; every iteration is independent.
pub async fn run_ingestion_scenario<C: PublishClient>(
    client: &C,
    payload: &MeterPayload,
    ctx: IterationContext,
    options: &ScenarioOptions,
    default_tags: &[(&str, &str)],
) -> CheckSet {
    let request_tags = merged_tags(default_tags, &options.tags);

    let result = client.publish(payload, Some(&request_tags)).await;
    let checks = run_publish_checks(&result.response, result.data.as_ref(), options.max_duration);

    if let Some(error_handler) = &options.error_handler {
        let mut error_tags = request_tags;
        error_tags.insert("vuId".to_string(), ctx.vu_id.to_string());
        error_tags.insert("iterId".to_string(), ctx.iter_id.to_string());
        error_handler.log_error(!checks.all_passed(), &result.response, &error_tags);
    }

    checks
}

/// Meter ingestion iteration: generate a synthetic payload for the
/// configured kind (electricity unless overridden), publish it and run the
/// checks.
pub async fn meter_ingestion_scenario<C: PublishClient>(
    client: &C,
    registry: &BuilderRegistry,
    ctx: IterationContext,
    options: &ScenarioOptions,
) -> Result<CheckSet, Box<dyn Error>> {
    let meter_type = options.meter_type.unwrap_or(MeterType::Electricity);
    let payload = generate_meter_payload(registry, meter_type, ctx.vu_id, ctx.iter_id)?;

    let default_tags = [
        ("name", "meter_ingestion"),
        ("endpoint", "publish"),
        ("meter_type", meter_type.as_str()),
    ];
    Ok(run_ingestion_scenario(client, &payload, ctx, options, &default_tags).await)
}

/// Publishes the documented electricity example event instead of a synthetic
/// payload.
pub async fn electricity_example_scenario<C: PublishClient>(
    client: &C,
    ctx: IterationContext,
    options: &ScenarioOptions,
) -> CheckSet {
    let payload = electricity_example_payload();
    let default_tags = [
        ("name", "meter_ingestion"),
        ("endpoint", "publish"),
        ("meter_type", MeterType::Electricity.as_str()),
    ];
    run_ingestion_scenario(client, &payload, ctx, options, &default_tags).await
}

/// Publishes the documented gas example event.
pub async fn gas_example_scenario<C: PublishClient>(
    client: &C,
    ctx: IterationContext,
    options: &ScenarioOptions,
) -> CheckSet {
    let payload = gas_example_payload();
    let default_tags = [
        ("name", "meter_ingestion"),
        ("endpoint", "publish"),
        ("meter_type", MeterType::Gas.as_str()),
    ];
    run_ingestion_scenario(client, &payload, ctx, options, &default_tags).await
}

/// Health probe with its own tighter latency budget.
pub async fn run_health_check(
    client: &HealthClient,
    ctx: IterationContext,
    options: &ScenarioOptions,
) -> CheckSet {
    let result = client.get_health("/health").await;

    let mut checks = CheckSet::default();
    checks.record("health check status is 200", result.response.status == 200);
    checks.record("health check has response body", result.response.has_body());
    checks.record(
        "health check response time under threshold",
        result.response.duration < Duration::from_millis(500),
    );
    if result.response.status == 200 {
        checks.record("health check response is valid JSON", result.data.is_some());
    }

    if let Some(error_handler) = &options.error_handler {
        let mut error_tags = options.tags.clone();
        error_tags.insert("vuId".to_string(), ctx.vu_id.to_string());
        error_tags.insert("iterId".to_string(), ctx.iter_id.to_string());
        error_handler.log_error(!checks.all_passed(), &result.response, &error_tags);
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion_client::PublishResult;
    use assert2::{check, let_assert};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Publish double returning a canned response and capturing the payloads
    /// and tags it was handed.
    struct StubClient {
        status: u16,
        body: Option<String>,
        duration: Duration,
        seen_tags: Arc<Mutex<Vec<HashMap<String, String>>>>,
        seen_payloads: Arc<Mutex<Vec<MeterPayload>>>,
    }

    impl StubClient {
        fn with_response(status: u16, body: Option<&str>) -> Self {
            Self {
                status,
                body: body.map(|body| body.to_string()),
                duration: Duration::from_millis(20),
                seen_tags: Arc::new(Mutex::new(Vec::new())),
                seen_payloads: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl PublishClient for StubClient {
        async fn publish(
            &self,
            payload: &MeterPayload,
            tags: Option<&HashMap<String, String>>,
        ) -> PublishResult {
            self.seen_payloads.lock().unwrap().push(payload.clone());
            self.seen_tags
                .lock()
                .unwrap()
                .push(tags.cloned().unwrap_or_default());

            let response = ApiResponse {
                url: "http://localhost:5197/Publish".into(),
                status: self.status,
                body: self.body.clone(),
                duration: self.duration,
                error_code: 0,
                traceparent: Some("00-trace-parent-01".into()),
            };
            PublishResult {
                data: response.parse_json_body(),
                response,
            }
        }
    }

    fn ctx() -> IterationContext {
        IterationContext { vu_id: 3, iter_id: 8 }
    }

    #[tokio::test]
    async fn all_checks_pass_for_fast_json_success() {
        let client = StubClient::with_response(200, Some(r#"{"status":"accepted"}"#));
        let registry = BuilderRegistry::with_defaults();

        let_assert!(
            Ok(checks) =
                meter_ingestion_scenario(&client, &registry, ctx(), &ScenarioOptions::default())
                    .await
        );
        check!(checks.all_passed());
        check!(checks.outcomes().len() == 4);

        // The synthetic payload embeds the iteration seeds.
        let payloads = client.seen_payloads.lock().unwrap();
        check!(payloads[0].key == "test-key-3-8");
    }

    #[tokio::test]
    async fn request_tags_include_meter_type_and_caller_tags() {
        let client = StubClient::with_response(200, Some("{}"));
        let registry = BuilderRegistry::with_defaults();
        let mut options = ScenarioOptions::default();
        options.meter_type = Some(MeterType::Gas);
        options
            .tags
            .insert("test_name".to_string(), "meter_ingestion".to_string());

        let_assert!(
            Ok(_) = meter_ingestion_scenario(&client, &registry, ctx(), &options).await
        );

        let tags = client.seen_tags.lock().unwrap();
        check!(tags[0].get("meter_type").map(String::as_str) == Some("gas"));
        check!(tags[0].get("endpoint").map(String::as_str) == Some("publish"));
        check!(tags[0].get("test_name").map(String::as_str) == Some("meter_ingestion"));
    }

    #[tokio::test]
    async fn failed_checks_reach_the_error_handler_with_context() {
        let client = StubClient::with_response(503, None);
        let registry = BuilderRegistry::with_defaults();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();

        let mut options = ScenarioOptions::default();
        options.error_handler = Some(ErrorHandler::custom_logger(move |error_data| {
            sink.lock().unwrap().push(error_data.clone());
        }));
        options
            .tags
            .insert("test_name".to_string(), "meter_ingestion".to_string());

        let_assert!(
            Ok(checks) = meter_ingestion_scenario(&client, &registry, ctx(), &options).await
        );
        check!(!checks.all_passed());

        let captured = captured.lock().unwrap();
        let_assert!([error_data] = captured.as_slice());
        check!(error_data.status == 503);
        check!(error_data.tags.get("vuId").map(String::as_str) == Some("3"));
        check!(error_data.tags.get("iterId").map(String::as_str) == Some("8"));
        check!(error_data.tags.get("meter_type").map(String::as_str) == Some("electricity"));
        check!(error_data.tags.get("test_name").map(String::as_str) == Some("meter_ingestion"));
    }

    #[tokio::test]
    async fn unparseable_success_body_fails_only_the_json_check() {
        let client = StubClient::with_response(200, Some("definitely not json"));
        let registry = BuilderRegistry::with_defaults();

        let_assert!(
            Ok(checks) =
                meter_ingestion_scenario(&client, &registry, ctx(), &ScenarioOptions::default())
                    .await
        );

        check!(!checks.all_passed());
        let failed: Vec<&str> = checks
            .outcomes()
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.name)
            .collect();
        check!(failed == vec!["response is valid JSON"]);
    }

    #[tokio::test]
    async fn slow_response_fails_the_latency_check() {
        let mut client = StubClient::with_response(200, Some("{}"));
        client.duration = Duration::from_millis(1500);
        let registry = BuilderRegistry::with_defaults();

        let_assert!(
            Ok(checks) =
                meter_ingestion_scenario(&client, &registry, ctx(), &ScenarioOptions::default())
                    .await
        );

        check!(!checks.all_passed());
        let failed: Vec<&str> = checks
            .outcomes()
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.name)
            .collect();
        check!(failed == vec!["response time under threshold"]);
    }

    #[tokio::test]
    async fn example_scenarios_publish_the_documented_events() {
        let client = StubClient::with_response(200, Some("{}"));

        let checks = electricity_example_scenario(&client, ctx(), &ScenarioOptions::default()).await;
        check!(checks.all_passed());

        let checks = gas_example_scenario(&client, ctx(), &ScenarioOptions::default()).await;
        check!(checks.all_passed());

        let payloads = client.seen_payloads.lock().unwrap();
        check!(payloads[0].message.event_instance_id == "de53fdd3-1960-414f-8c5f-bed3d6a099f9");
        check!(payloads[1].message.event_instance_id == "f0f639bd-63e9-4e0c-9036-460fdae17423");
    }
}
