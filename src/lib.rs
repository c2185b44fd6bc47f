pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod store;
pub mod validation;

use axum::{
    routing::{delete, get},
    Router,
};
use state::AppState;
use tower_http::services::ServeDir;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .nest_service("/assets", ServeDir::new("assets"))
        .route(
            "/api/bookings",
            get(handlers::list_bookings).post(handlers::create_booking),
        )
        .route("/api/bookings/{id}", delete(handlers::delete_booking))
        .route("/api/schedule", get(handlers::get_schedule))
        .with_state(state)
}
