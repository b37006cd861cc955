use axum::Router;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod auth;
pub mod delay;
pub mod error;
pub mod fault;
pub mod initialize;
pub mod reservations;
pub mod search;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(initialize::routes())
        .merge(auth::routes())
        .merge(search::routes())
        .merge(reservations::routes())
        .merge(admin::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
