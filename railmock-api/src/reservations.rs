use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use railmock_core::{
    fixtures,
    reservation::{parse_reservation_id, ReservationRequest, SeatReservation},
    Operation,
};
use tracing::{info, warn};

use crate::{error::{status_response, AppError}, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/train/reserve", post(reserve))
        .route("/api/train/reserve/{reservation_id}/commit", post(commit_reservation))
        .route("/api/train/reserve/{reservation_id}", delete(cancel_reservation))
        .route("/api/train/reserve/", delete(cancel_reservation_without_id))
        .route("/api/train/reservations", get(list_reservations))
}

/// POST /api/train/reserve
async fn reserve(State(state): State<AppState>, request: Request) -> Result<Response, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::Reserve, async move {
            let body = Bytes::from_request(request, &state)
                .await
                .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

            let req: ReservationRequest = serde_json::from_slice(&body).map_err(|e| {
                warn!("Reservation body did not parse: {}", e);
                AppError::Validation(e.to_string())
            })?;
            req.validate()?;

            info!("Reservation accepted for {} {} ({} seats)", req.train_class, req.train_name, req.seats.len());
            Ok::<_, AppError>((StatusCode::ACCEPTED, Json(fixtures::reservation_accepted())).into_response())
        })
        .await?
}

/// POST /api/train/reserve/{reservation_id}/commit
async fn commit_reservation(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::CommitReservation, async move {
            let reservation_id = parse_reservation_id(&raw_id)?;
            state.payments.record_payment(reservation_id).await;

            Ok::<_, AppError>(status_response(StatusCode::ACCEPTED))
        })
        .await?
}

/// DELETE /api/train/reserve/{reservation_id}
/// Nothing is tracked, so cancelling twice is not an error.
async fn cancel_reservation(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .delays
        .clone()
        .run(Operation::CancelReservation, cancel(raw_id))
        .await?
}

/// DELETE /api/train/reserve/
/// The router would answer 404 for the empty id; treat it like any other bad id.
async fn cancel_reservation_without_id(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .delays
        .clone()
        .run(Operation::CancelReservation, cancel(String::new()))
        .await?
}

async fn cancel(raw_id: String) -> Result<StatusCode, AppError> {
    let reservation_id = parse_reservation_id(&raw_id)?;
    info!("Reservation {} cancelled", reservation_id);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/train/reservations
async fn list_reservations(State(state): State<AppState>) -> Result<Json<Vec<SeatReservation>>, AppError> {
    let reservations = state
        .delays
        .clone()
        .run(Operation::ListReservations, async { fixtures::reservations(Utc::now()) })
        .await?;
    Ok(Json(reservations))
}
