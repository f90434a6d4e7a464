//! Core data models for the occupancy engine.
//!
//! Input records (rooms, guests, reservations, room types) are supplied by
//! the calling layer; result records are returned by the calculation module.

mod date_range;
mod guest;
mod occupancy_result;
mod pricing_result;
mod recommendation;
mod reservation;
mod room;

pub use date_range::DateRange;
pub use guest::{Guest, GuestStatus};
pub use occupancy_result::{
    AvailabilityResult, Coverage, StatusSnapshot, UnavailabilityReason, UnavailabilitySource,
};
pub use pricing_result::{
    Adjustment, AdjustmentKind, AuditStep, AuditTrace, AuditWarning, FeeBreakdown, FeeKind,
    FeeLine, PricingBreakdown, ReservationPricing, TaxBreakdown, TaxKind, TaxLine,
};
pub use recommendation::{
    AssignmentPlan, AssignmentStrategy, FloorPreference, RoomAllocation, RoomPreferences,
};
pub use reservation::{Reservation, ReservationStatus};
pub use room::{OperationalLock, Room, RoomStatus, RoomType};
