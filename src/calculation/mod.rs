//! Calculation logic for the Room Occupancy Engine.
//!
//! This module contains the occupancy rules (guest-derived room status,
//! date-scoped status, availability), the stay pricing pipeline (one rule per
//! file, each recording an audit step) and the recommendation scorer and
//! multi-room assignment planner built on top of them.

mod adjustment;
mod assignment;
mod availability;
mod currency;
mod date_status;
mod early_booking;
mod length_of_stay;
mod reservation_pricing;
mod room_pricing;
mod room_scoring;
mod room_status;
mod seasonal_adjustment;
mod stay_nights;
mod weekend_surcharge;

pub use adjustment::AdjustmentResult;
pub use assignment::{SPLIT_MIN_CAPACITY, suggest_assignments};
pub use availability::{check_availability, find_available_rooms};
pub use currency::round_cents;
pub use date_status::{status_calendar, status_for_date};
pub use early_booking::calculate_early_booking_discount;
pub use length_of_stay::calculate_length_of_stay_discount;
pub use reservation_pricing::{calculate_fees, calculate_pricing, calculate_taxes};
pub use room_pricing::{RoomPricingResult, price, price_room};
pub use room_scoring::{
    BASE_SCORE, HIGH_FLOOR_MIN, LOW_FLOOR_MAX, RankedRoom, rank_rooms, score_room,
};
pub use room_status::{
    RoomStatusOutcome, derive_keep_open, derive_room_status, recompute, recompute_room_status,
};
pub use seasonal_adjustment::calculate_seasonal_adjustment;
pub use stay_nights::{NightKind, StayNight, classify_nights, count_weekend_nights, days_until};
pub use weekend_surcharge::calculate_weekend_surcharge;
