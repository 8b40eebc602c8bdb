//! Transpiler service REST client.
//!
//! ## Submission flow
//!
//! 1. Emit the circuit as QASM 2.0
//! 2. `POST /transpile` with the program + device constraints → `task_id`
//! 3. Poll `GET /transpile/{task_id}` until terminal state
//! 4. Parse the returned QASM back into a circuit
//!
//! The device constraints (coupling map, basis gates, AI flag,
//! optimization level) are fixed at client construction and sent with
//! every task, so one client instance serves the whole benchmark run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use quench_ir::Circuit;
use quench_target::{EngineError, EngineResult, Target, TranspilerEngine};

use crate::error::{ServiceError, ServiceResult};

/// Default transpiler service endpoint.
pub const BASE_URL: &str = "https://transpiler.quench-qc.dev";

/// User agent string for service submissions.
const USER_AGENT: &str = concat!("quench-service/", env!("CARGO_PKG_VERSION"));

/// Options fixed at client construction.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Service base URL.
    pub base_url: String,
    /// Bearer token, if the deployment requires one.
    pub token: Option<String>,
    /// Enable AI-assisted routing and synthesis.
    pub ai: bool,
    /// Optimization level (0-3).
    pub optimization_level: u8,
    /// Interval between task status polls.
    pub poll_interval: Duration,
    /// Give up waiting for a task after this long.
    pub poll_timeout: Duration,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            token: None,
            ai: true,
            optimization_level: 3,
            poll_interval: Duration::from_secs(2),
            poll_timeout: Duration::from_secs(600),
        }
    }
}

/// Transpiler service API client.
///
/// Cheap to clone; holds one connection pool.
#[derive(Clone)]
pub struct ServiceClient {
    /// HTTP client.
    client: Client,
    /// API base URL.
    base_url: String,
    /// Bearer token.
    token: Option<String>,
    /// Coupling edges sent with every task.
    coupling_map: Vec<(u32, u32)>,
    /// Basis gate names sent with every task.
    basis_gates: Vec<String>,
    /// AI-assisted mode flag.
    ai: bool,
    /// Optimization level (0-3).
    optimization_level: u8,
    /// Poll cadence.
    poll_interval: Duration,
    /// Poll deadline.
    poll_timeout: Duration,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url)
            .field("ai", &self.ai)
            .field("optimization_level", &self.optimization_level)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl ServiceClient {
    /// Create a client bound to a target device.
    pub fn new(target: &Target, options: ServiceOptions) -> ServiceResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            token: options.token,
            coupling_map: target.topology().edges().to_vec(),
            basis_gates: target.basis().gates().to_vec(),
            ai: options.ai,
            optimization_level: options.optimization_level,
            poll_interval: options.poll_interval,
            poll_timeout: options.poll_timeout,
        })
    }

    /// Override the base URL (for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the full API URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Submit a transpilation task. Returns the task id.
    #[instrument(skip(self, qasm))]
    pub async fn submit(&self, qasm: &str) -> ServiceResult<String> {
        let url = self.url("/transpile");
        debug!("Submitting transpilation task to {}", url);

        let body = TranspileRequest {
            name: format!("quench-{}", uuid::Uuid::new_v4()),
            qasm: qasm.to_string(),
            coupling_map: self.coupling_map.iter().map(|&(a, b)| [a, b]).collect(),
            basis_gates: self.basis_gates.clone(),
            ai: self.ai,
            optimization_level: self.optimization_level,
        };

        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        let submitted: SubmitResponse = self.handle_response(response).await?;
        Ok(submitted.task_id)
    }

    /// Get the state of a task.
    #[instrument(skip(self))]
    pub async fn task(&self, task_id: &str) -> ServiceResult<TaskResponse> {
        let url = self.url(&format!("/transpile/{task_id}"));
        debug!("Polling task at {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Transpile a circuit: submit, poll to completion, parse the result.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub async fn run(&self, circuit: &Circuit) -> ServiceResult<Circuit> {
        let qasm = quench_qasm2::emit(circuit);
        let task_id = self.submit(&qasm).await?;

        let mut waited = Duration::ZERO;
        loop {
            let task = self.task(&task_id).await?;

            if task.is_success() {
                let program = task
                    .result
                    .ok_or_else(|| ServiceError::MissingResult(task_id.clone()))?;
                return Ok(quench_qasm2::parse(&program)?);
            }
            if task.is_failed() {
                return Err(ServiceError::TaskFailed(
                    task.reason.unwrap_or_else(|| "unspecified".to_string()),
                ));
            }

            if waited >= self.poll_timeout {
                return Err(ServiceError::Timeout {
                    task_id,
                    waited_secs: waited.as_secs(),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
            waited += self.poll_interval;
        }
    }

    /// Handle an HTTP response, extracting JSON or returning an error.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> ServiceResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json().await?;
            Ok(body)
        } else {
            let message = response.text().await.unwrap_or_default();

            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(ServiceError::AuthFailed(message))
                }
                StatusCode::NOT_FOUND => Err(ServiceError::TaskNotFound(message)),
                _ => Err(ServiceError::Api {
                    status: status.as_u16(),
                    message,
                }),
            }
        }
    }
}

#[async_trait]
impl TranspilerEngine for ServiceClient {
    fn name(&self) -> &str {
        "transpiler-service"
    }

    async fn transpile(&self, circuit: &Circuit) -> EngineResult<Circuit> {
        self.run(circuit).await.map_err(EngineError::from)
    }
}

// ─── Request types ──────────────────────────────────────────────────

/// Request body for submitting a transpilation task.
#[derive(Debug, Clone, Serialize)]
pub struct TranspileRequest {
    /// Task name.
    pub name: String,
    /// Circuit program, QASM 2.0.
    pub qasm: String,
    /// Coupling edges of the target device.
    pub coupling_map: Vec<[u32; 2]>,
    /// Allowed operation names.
    pub basis_gates: Vec<String>,
    /// Enable AI-assisted routing and synthesis.
    pub ai: bool,
    /// Optimization level (0-3).
    pub optimization_level: u8,
}

// ─── Response types ─────────────────────────────────────────────────

/// Response from submitting a task.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Task id — poll this.
    pub task_id: String,
}

/// Task status response.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    /// Task id.
    #[serde(default)]
    pub task_id: Option<String>,
    /// Task state: PENDING, RUNNING, SUCCESS, FAILURE.
    pub state: String,
    /// Result program (QASM 2.0), present when state is SUCCESS.
    #[serde(default)]
    pub result: Option<String>,
    /// Failure reason, present when state is FAILURE.
    #[serde(default)]
    pub reason: Option<String>,
}

impl TaskResponse {
    /// Check if the task is still pending or running.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.state.to_uppercase().as_str(),
            "PENDING" | "RUNNING" | "QUEUED"
        )
    }

    /// Check if the task completed successfully.
    pub fn is_success(&self) -> bool {
        self.state.to_uppercase() == "SUCCESS"
    }

    /// Check if the task failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state.to_uppercase().as_str(), "FAILURE" | "FAILED")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quench_target::Topology;

    fn test_client() -> ServiceClient {
        let target = Target::heron(5);
        ServiceClient::new(&target, ServiceOptions::default()).unwrap()
    }

    #[test]
    fn test_request_serialization() {
        let request = TranspileRequest {
            name: "quench-test".into(),
            qasm: "OPENQASM 2.0;".into(),
            coupling_map: vec![[0, 1], [1, 2]],
            basis_gates: vec!["rz".into(), "sx".into(), "x".into(), "cz".into()],
            ai: true,
            optimization_level: 3,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["coupling_map"][1][0], 1);
        assert_eq!(json["basis_gates"][3], "cz");
        assert_eq!(json["ai"], true);
        assert_eq!(json["optimization_level"], 3);
    }

    #[test]
    fn test_task_response_states() {
        let task: TaskResponse =
            serde_json::from_str(r#"{"task_id": "t1", "state": "PENDING"}"#).unwrap();
        assert!(task.is_pending());
        assert!(!task.is_success());

        let task: TaskResponse = serde_json::from_str(
            r#"{"state": "SUCCESS", "result": "OPENQASM 2.0;\nqreg q[1];\nx q[0];\n"}"#,
        )
        .unwrap();
        assert!(task.is_success());
        assert!(task.result.is_some());

        let task: TaskResponse =
            serde_json::from_str(r#"{"state": "FAILURE", "reason": "no layout found"}"#).unwrap();
        assert!(task.is_failed());
        assert_eq!(task.reason.as_deref(), Some("no layout found"));
    }

    #[test]
    fn test_client_captures_target() {
        let target = Target::new(
            "dev",
            Topology::custom(3, [(0, 1), (1, 2)]).unwrap(),
            quench_target::BasisGates::heron(),
        )
        .unwrap();
        let client = ServiceClient::new(&target, ServiceOptions::default()).unwrap();
        assert_eq!(client.coupling_map, vec![(0, 1), (1, 2)]);
        assert!(client.basis_gates.iter().any(|g| g == "cz"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let target = Target::heron(3);
        let options = ServiceOptions {
            token: Some("secret-token".into()),
            ..ServiceOptions::default()
        };
        let client = ServiceClient::new(&target, options).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_base_url_normalized() {
        let client = test_client().with_base_url("http://localhost:8080/");
        assert_eq!(client.url("/transpile"), "http://localhost:8080/transpile");
    }
}
