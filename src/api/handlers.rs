//! HTTP request handlers for the occupancy engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_pricing, check_availability, find_available_rooms, rank_rooms,
    recompute_room_status, status_calendar, suggest_assignments,
};
use crate::error::EngineError;
use crate::models::Room;

use super::request::{
    AvailabilityRequest, PricingRequest, RecommendationRequest, RoomStatusRequest,
    StatusOnDateRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, PricingResponse, RecommendationResponse,
    RoomStatusResponse, ScoredRoom, StatusOnDateResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rooms/status", post(room_status_handler))
        .route("/rooms/status-on-date", post(status_on_date_handler))
        .route("/availability", post(availability_handler))
        .route("/pricing", post(pricing_handler))
        .route("/recommendations", post(recommendations_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /rooms/status.
///
/// Recomputes a room's derived status, keep-open flag and guest id cache.
async fn room_status_handler(payload: Result<Json<RoomStatusRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing room status request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let room = recompute_room_status(&request.room, &request.guests);
    info!(
        correlation_id = %correlation_id,
        room_id = %room.id,
        guests = request.guests.len(),
        status = %room.status,
        keep_open = room.keep_open,
        "Room status recomputed"
    );
    json_ok(RoomStatusResponse { room })
}

/// Handler for POST /rooms/status-on-date.
///
/// Returns the status a room shows on one date, or on each day of a range.
async fn status_on_date_handler(
    payload: Result<Json<StatusOnDateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing status-on-date request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let days = match request.validate() {
        Ok(days) => days,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let snapshots = status_calendar(&request.room, &days, &request.reservations, &request.guests);
    info!(
        correlation_id = %correlation_id,
        room_id = %request.room.id,
        days = snapshots.len(),
        "Date-scoped status computed"
    );
    json_ok(StatusOnDateResponse { snapshots })
}

/// Handler for POST /availability.
///
/// Checks every room with a known room type against the requested stay.
async fn availability_handler(
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let range = match request.validate() {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let (typed, untyped): (Vec<&Room>, Vec<&Room>) = request.rooms.iter().partition(|room| {
        request
            .room_types
            .iter()
            .any(|t| t.id == room.room_type_id)
    });
    let excluded_room_ids: Vec<String> = untyped.iter().map(|r| r.id.clone()).collect();
    if !excluded_room_ids.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            excluded = ?excluded_room_ids,
            "Rooms with unknown room types excluded"
        );
    }

    let results: Vec<_> = typed
        .iter()
        .map(|room| check_availability(room, &range, &request.reservations, &request.guests))
        .collect();
    let available_room_ids: Vec<String> = find_available_rooms(
        &request.rooms,
        &request.room_types,
        &range,
        &request.reservations,
        &request.guests,
    )
    .into_iter()
    .map(|r| r.id.clone())
    .collect();

    info!(
        correlation_id = %correlation_id,
        date_range = %range,
        checked = results.len(),
        available = available_room_ids.len(),
        "Availability checked"
    );
    json_ok(AvailabilityResponse {
        available_room_ids,
        excluded_room_ids,
        results,
    })
}

/// Handler for POST /pricing.
///
/// Prices a reservation across its rooms and returns the quote.
async fn pricing_handler(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pricing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let range = match request.validate() {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let start_time = Instant::now();
    let pricing = calculate_pricing(
        &request.rooms,
        &request.room_types,
        &range,
        state.config().config(),
        today,
    );

    for warning in &pricing.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Pricing warning"
        );
    }
    info!(
        correlation_id = %correlation_id,
        rooms = pricing.rooms.len(),
        nights = pricing.nights,
        total = %pricing.total,
        duration_us = start_time.elapsed().as_micros(),
        "Pricing completed successfully"
    );

    json_ok(PricingResponse {
        quote_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pricing,
    })
}

/// Handler for POST /recommendations.
///
/// Ranks the rooms free for the stay and suggests assignment plans.
async fn recommendations_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recommendation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let range = match request.validate() {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let available: Vec<Room> = find_available_rooms(
        &request.rooms,
        &request.room_types,
        &range,
        &request.reservations,
        &request.guests,
    )
    .into_iter()
    .cloned()
    .collect();

    let preferences = request.preferences.as_ref();
    let ranked_rooms: Vec<ScoredRoom> =
        rank_rooms(&available, &request.room_types, request.party_size, preferences)
            .into_iter()
            .map(|ranked| ScoredRoom {
                room_id: ranked.room.id.clone(),
                score: ranked.score,
            })
            .collect();

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let plans = suggest_assignments(
        &available,
        &request.room_types,
        request.party_size,
        &range,
        preferences,
        state.config().config(),
        today,
    );

    info!(
        correlation_id = %correlation_id,
        party_size = request.party_size,
        candidates = available.len(),
        plans = plans.len(),
        "Recommendations generated"
    );
    json_ok(RecommendationResponse {
        ranked_rooms,
        plans,
    })
}
