use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    routing::post,
    Router,
};
use railmock_core::Operation;
use tracing::info;

use crate::{error::{status_response, AppError}, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/initialize", post(initialize))
}

/// POST /initialize
/// The only operation that consults the fault hook.
async fn initialize(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let delays = state.delays.clone();
    delays
        .run(Operation::Initialize, async move {
            state.faults.check(uri.path())?;

            info!("Initialize accepted");
            Ok::<_, AppError>(status_response(StatusCode::ACCEPTED))
        })
        .await?
}
