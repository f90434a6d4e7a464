//! Response types for the occupancy engine API.
//!
//! This module defines the success bodies for each endpoint and the error
//! response structures.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AssignmentPlan, AvailabilityResult, ReservationPricing, Room, StatusSnapshot,
};

/// Response body for `POST /rooms/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusResponse {
    /// The room with its derived fields recomputed.
    pub room: Room,
}

/// Response body for `POST /rooms/status-on-date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOnDateResponse {
    /// One snapshot per requested day.
    pub snapshots: Vec<StatusSnapshot>,
}

/// Response body for `POST /availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Rooms free for the whole stay, in request order.
    pub available_room_ids: Vec<String>,
    /// Rooms skipped because their room type was not supplied.
    pub excluded_room_ids: Vec<String>,
    /// Per-room availability detail for the checked rooms.
    pub results: Vec<AvailabilityResult>,
}

/// Response body for `POST /pricing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResponse {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was generated.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the quote.
    pub engine_version: String,
    /// The priced reservation.
    #[serde(flatten)]
    pub pricing: ReservationPricing,
}

/// A room's score as returned by `POST /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRoom {
    /// The room.
    pub room_id: String,
    /// Its recommendation score.
    pub score: u8,
}

/// Response body for `POST /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Available rooms ranked best first.
    pub ranked_rooms: Vec<ScoredRoom>,
    /// Assignment plans, best first.
    pub plans: Vec<AssignmentPlan>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Validation { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("VALIDATION_ERROR", message, field),
            },
            EngineError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    "check_out must be after check_in",
                ),
            },
            EngineError::RoomNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ROOM_NOT_FOUND", message),
            },
            EngineError::GuestNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("GUEST_NOT_FOUND", message),
            },
            EngineError::ReservationNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RESERVATION_NOT_FOUND", message),
            },
        }
    }
}
