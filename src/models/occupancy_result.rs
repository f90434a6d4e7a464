//! Occupancy and availability result models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, RoomStatus};

/// The status a room shows (or showed) on a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// The room the snapshot describes.
    pub room_id: String,
    /// The calendar date of the snapshot.
    pub date: NaiveDate,
    /// The derived status on that date.
    pub status: RoomStatus,
    /// The derived keep-open flag on that date.
    pub keep_open: bool,
    /// Ids of guests present on that date.
    pub guests_on_date: Vec<String>,
    /// Ids of reservations spanning that date.
    pub reservations_on_date: Vec<String>,
}

/// How much of a requested range is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coverage {
    /// Every night is free.
    Available,
    /// Some nights are taken.
    PartiallyBlocked,
    /// Every night is taken.
    FullyBlocked,
}

/// Where an unavailability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailabilitySource {
    /// An operational lock on the room.
    OperationalLock,
    /// An overlapping active reservation.
    Reservation,
    /// Guests currently checked in.
    CheckedInGuests,
}

/// One human-readable reason a room is not free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityReason {
    /// What caused it.
    pub source: UnavailabilitySource,
    /// The reservation id, when the source is a reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for UnavailabilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// The outcome of an availability check for one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// The room checked.
    pub room_id: String,
    /// The range requested.
    pub date_range: DateRange,
    /// True when no night in the range is taken.
    pub is_available: bool,
    /// How much of the range is free.
    pub coverage: Coverage,
    /// Taken nights, sorted and de-duplicated.
    pub unavailable_dates: Vec<NaiveDate>,
    /// Why those nights are taken.
    pub reasons: Vec<UnavailabilityReason>,
}
