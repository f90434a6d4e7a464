//! HTTP API module for the occupancy engine.
//!
//! This module exposes the engine's operations as JSON endpoints: room
//! status recomputation, date-scoped status, availability, pricing and
//! recommendations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AvailabilityRequest, PricingRequest, RecommendationRequest, RoomStatusRequest,
    StatusOnDateRequest,
};
pub use response::{
    ApiError, AvailabilityResponse, PricingResponse, RecommendationResponse, RoomStatusResponse,
    ScoredRoom, StatusOnDateResponse,
};
pub use state::AppState;
