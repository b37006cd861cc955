use axum::{
    extract::{Query, State},
    http::Uri,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use railmock_core::{
    fixtures,
    search::{Station, Train, TrainSearchQuery, TrainSeatQuery, TrainSeatSearchResponse},
    Operation,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/train/search/stations", get(list_stations))
        .route("/api/train/search", get(search_trains))
        .route("/api/train/search/seats", get(list_train_seats))
}

/// Query parsing happens after the delay, so it is done by hand instead of in the extractor.
fn read_query<T: DeserializeOwned>(uri: &Uri) -> Result<T, AppError> {
    let Query(query) = Query::<T>::try_from_uri(uri)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    Ok(query)
}

/// GET /api/train/search/stations
async fn list_stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, AppError> {
    let stations = state
        .delays
        .clone()
        .run(Operation::ListStations, async { fixtures::stations() })
        .await?;
    Ok(Json(stations))
}

/// GET /api/train/search?use_at=&from=&to=
async fn search_trains(State(state): State<AppState>, uri: Uri) -> Result<Json<Vec<Train>>, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::SearchTrains, async move {
            let criteria = read_query::<TrainSearchQuery>(&uri)?.validate()?;
            debug!("Train search {} -> {} at {}", criteria.from, criteria.to, criteria.use_at);

            Ok::<_, AppError>(Json(fixtures::trains(Utc::now())))
        })
        .await?
}

/// GET /api/train/search/seats?train_class=&train_name=&car_number=&from=&to=
async fn list_train_seats(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<TrainSeatSearchResponse>, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::ListTrainSeats, async move {
            let criteria = read_query::<TrainSeatQuery>(&uri)?.validate()?;
            debug!(
                "Seat search {} {} car {} ({} -> {})",
                criteria.train_class, criteria.train_name, criteria.car_number, criteria.from, criteria.to
            );

            Ok::<_, AppError>(Json(fixtures::train_seats(Utc::now())))
        })
        .await?
}
