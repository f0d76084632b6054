//! Message-passing boundary for running type inference off the caller's task.
//!
//! Requests carry a parsed JSON value and the alias flag; responses carry
//! either the generated declaration or a fixed failure message. The
//! specific error is logged, not sent back.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{Result, ToolbenchError};
use crate::types::{infer, DEFAULT_TYPE_NAME};

/// Message returned for every failed request.
pub const FAILURE_MESSAGE: &str = "Invalid JSON input";

/// A type generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRequest {
    /// Parsed JSON to infer from.
    pub data: Value,
    /// Emit alias syntax for object declarations.
    #[serde(default)]
    pub use_type_alias: bool,
}

impl TypeRequest {
    /// Create a new request.
    pub fn new(data: Value, use_type_alias: bool) -> Self {
        Self {
            data,
            use_type_alias,
        }
    }
}

/// Outcome of a type generation request.
///
/// Serializes as `{"success": true, "generatedTypes": ...}` or
/// `{"success": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TypeResponse {
    pub fn success(generated_types: impl Into<String>) -> Self {
        Self {
            success: true,
            generated_types: Some(generated_types.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            generated_types: None,
            error: Some(error.into()),
        }
    }
}

/// Run a request synchronously on the current thread.
pub fn handle_request(request: &TypeRequest) -> TypeResponse {
    match infer(&request.data, DEFAULT_TYPE_NAME, request.use_type_alias) {
        Ok(types) => TypeResponse::success(types),
        Err(e) => {
            tracing::warn!(error = %e, "type generation failed");
            TypeResponse::failure(FAILURE_MESSAGE)
        }
    }
}

/// Run a request on tokio's blocking pool so the caller's task stays free.
pub async fn generate_types(request: TypeRequest) -> TypeResponse {
    match tokio::task::spawn_blocking(move || handle_request(&request)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "type generation task panicked");
            TypeResponse::failure(FAILURE_MESSAGE)
        }
    }
}

/// Background task answering [`TypeRequest`]s in arrival order.
///
/// Posting is fire-and-forget: there is no cancellation, timeout, or
/// coalescing. Responses arrive on the receiver returned by [`spawn`].
/// Callers that post without draining responses will block once both
/// channel buffers are full.
///
/// [`spawn`]: TypeWorker::spawn
pub struct TypeWorker {
    requests: mpsc::Sender<TypeRequest>,
    task: JoinHandle<()>,
}

impl TypeWorker {
    /// Start a worker on the current tokio runtime.
    pub fn spawn(buffer: usize) -> (Self, mpsc::Receiver<TypeResponse>) {
        let buffer = buffer.max(1);
        let (request_tx, mut request_rx) = mpsc::channel::<TypeRequest>(buffer);
        let (response_tx, response_rx) = mpsc::channel::<TypeResponse>(buffer);

        let task = tokio::spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let response = generate_types(request).await;
                if response_tx.send(response).await.is_err() {
                    tracing::debug!("response receiver dropped, stopping type worker");
                    break;
                }
            }
        });

        (
            Self {
                requests: request_tx,
                task,
            },
            response_rx,
        )
    }

    /// Queue a request. Fails only if the worker has stopped.
    pub async fn post(&self, request: TypeRequest) -> Result<()> {
        self.requests
            .send(request)
            .await
            .map_err(|_| ToolbenchError::WorkerClosed)
    }

    /// Stop accepting requests and wait for queued ones to finish.
    pub async fn terminate(self) {
        drop(self.requests);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "type worker exited abnormally");
        }
    }
}
