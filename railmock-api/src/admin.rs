//! Control surface for the load harness: tune delays, swap the fault
//! injector, inspect recorded payments. Never delayed, never faulted.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use railmock_core::{FaultSpec, Operation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::info;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct DelayUpdate {
    pub millis: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub count: usize,
    pub reservation_ids: Vec<u64>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/_mock/delays", get(list_delays))
        .route("/_mock/delays/{operation}", put(set_delay))
        .route("/_mock/fault", put(set_fault))
        .route("/_mock/payments", get(list_payments))
}

fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Validation(e.to_string()))
}

/// GET /_mock/delays
async fn list_delays(State(state): State<AppState>) -> Json<BTreeMap<Operation, u64>> {
    let millis = state
        .delays
        .snapshot()
        .into_iter()
        .map(|(op, delay)| (op, delay.as_millis() as u64))
        .collect();
    Json(millis)
}

/// PUT /_mock/delays/{operation}
async fn set_delay(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let op = operation
        .parse::<Operation>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    let update: DelayUpdate = parse_json(&body)?;

    state.delays.set(op, Duration::from_millis(update.millis));
    info!("Delay for {} set to {}ms", op, update.millis);

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /_mock/fault
async fn set_fault(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, AppError> {
    let spec: FaultSpec = parse_json(&body)?;
    info!("Fault injector set to {:?}", spec);

    state.faults.replace(spec.into_injector());
    Ok(StatusCode::NO_CONTENT)
}

/// GET /_mock/payments
async fn list_payments(State(state): State<AppState>) -> Json<PaymentSummary> {
    let reservation_ids = state.payments.recorded().await;
    Json(PaymentSummary {
        count: reservation_ids.len(),
        reservation_ids,
    })
}
