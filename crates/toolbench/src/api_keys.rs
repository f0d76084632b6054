//! API-key quota arithmetic.
//!
//! Given a monthly request quota per key and how often an operation runs,
//! works out how many keys are needed and how to rotate them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolbenchError};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;
const MINUTES_PER_MONTH: f64 = 30.0 * MINUTES_PER_DAY;
const DAYS_PER_MONTH: f64 = 30.0;

/// Calculator input.
///
/// Provide either `requests_per_operation`, or both `limit_reached_in_days`
/// and `known_interval` so it can be derived. Zero is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeysInput {
    /// Maximum requests per key per month.
    pub requests_per_month: f64,
    /// Minutes between operations.
    pub operation_interval: f64,
    /// Number of keys on hand.
    #[serde(default)]
    pub available_keys: Option<u32>,
    /// Requests issued by a single operation.
    #[serde(default)]
    pub requests_per_operation: Option<f64>,
    /// Days one key lasted when running every `known_interval` minutes.
    #[serde(default)]
    pub limit_reached_in_days: Option<f64>,
    /// Interval (minutes) at which `limit_reached_in_days` was observed.
    #[serde(default)]
    pub known_interval: Option<f64>,
}

/// Calculator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeysOutput {
    /// Keys needed to cover a full month.
    pub required_keys: u64,
    /// Whole days a single key lasts.
    pub days_before_limit: u64,
    /// Interval (minutes) that fits a month into the available keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_interval: Option<u64>,
    /// Requests per operation, given or derived.
    pub calculated_requests_per_operation: f64,
    /// Days between key rotations.
    pub api_key_rotation_interval: f64,
}

/// Run the calculation.
pub fn calculate(input: &ApiKeysInput) -> Result<ApiKeysOutput> {
    if input.requests_per_month <= 0.0 {
        return Err(ToolbenchError::InvalidInput(
            "requests per month must be positive".to_string(),
        ));
    }
    if input.operation_interval <= 0.0 {
        return Err(ToolbenchError::InvalidInput(
            "operation interval must be positive".to_string(),
        ));
    }

    let requests_per_operation = requests_per_operation(input).ok_or_else(|| {
        ToolbenchError::InsufficientData(
            "provide either requests per operation or (limit reached in days and known interval)"
                .to_string(),
        )
    })?;

    let rpm = input.requests_per_month;
    let operations_per_day = MINUTES_PER_DAY / input.operation_interval;
    let daily_request_usage = operations_per_day * requests_per_operation;
    let days_before_limit = (rpm / daily_request_usage).floor() as u64;

    let total_operations = MINUTES_PER_MONTH / input.operation_interval;
    let total_requests = total_operations * requests_per_operation;
    let required_keys = (total_requests / rpm).ceil() as u64;

    let available_keys = input.available_keys.filter(|&k| k > 0);

    let api_key_rotation_interval = match available_keys {
        Some(keys) => DAYS_PER_MONTH / keys as f64,
        None => days_before_limit as f64 / required_keys as f64,
    };

    let new_interval = available_keys.map(|keys| {
        let max_operations = keys as f64 * rpm / requests_per_operation;
        (MINUTES_PER_MONTH / max_operations).ceil() as u64
    });

    tracing::debug!(required_keys, days_before_limit, "calculated api key quota");

    Ok(ApiKeysOutput {
        required_keys,
        days_before_limit,
        new_interval,
        calculated_requests_per_operation: requests_per_operation,
        api_key_rotation_interval,
    })
}

fn requests_per_operation(input: &ApiKeysInput) -> Option<f64> {
    let positive = |v: Option<f64>| v.filter(|&x| x > 0.0);

    positive(input.requests_per_operation).or_else(|| {
        let days = positive(input.limit_reached_in_days)?;
        let interval = positive(input.known_interval)?;
        let requests_per_day = input.requests_per_month / days;
        let operations_per_day = MINUTES_PER_DAY / interval;
        positive(Some(requests_per_day / operations_per_day))
    })
}
