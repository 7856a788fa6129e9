//! Event persistence endpoints.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;

use evcal_core::Event;

use crate::routes::{AppError, method_not_allowed};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addEvent", post(add_events).fallback(method_not_allowed))
        .route("/getEvents", get(get_events).fallback(method_not_allowed))
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// POST /addEvent - Replace the stored event list with the submitted one
async fn add_events(
    State(state): State<AppState>,
    Json(events): Json<Vec<Event>>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store().replace_events(events)?;

    Ok(Json(MessageResponse {
        message: "Events added successfully".to_string(),
    }))
}

/// GET /getEvents - Return the full stored event list
async fn get_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let events = state.store().read_events()?;

    Ok(Json(EventsResponse { events }))
}
