//! Room, room type and occupancy status models.
//!
//! A [`Room`] carries two derived fields, `status` and `keep_open`, plus the
//! `assigned_guest_ids` cache. All three are rewritten by
//! [`recompute_room_status`](crate::calculation::recompute_room_status) and
//! are never trusted as the source of truth.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// The occupancy status of a room.
///
/// The first eight variants are derived from the room's guests. The last
/// three only ever come from an [`OperationalLock`].
///
/// # Example
///
/// ```
/// use occupancy_engine::models::RoomStatus;
///
/// assert_eq!(RoomStatus::PartiallyDeoccupied.to_string(), "partially-deoccupied");
/// assert!(RoomStatus::OutOfOrder.is_operational());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    /// No guests are assigned.
    Available,
    /// Fully booked ahead of arrival.
    Reserved,
    /// Booked, with spare capacity kept open for more bookings.
    PartiallyReserved,
    /// All guests checked in and the room is closed to further guests.
    Occupied,
    /// Some guests are in house and the room still accepts more.
    PartiallyOccupied,
    /// Every guest has checked out; housekeeping is due.
    Cleaning,
    /// Guests have left but the room has not been turned over.
    Deoccupied,
    /// Some guests have checked out while others remain booked or in house.
    PartiallyDeoccupied,
    /// Under a maintenance lock.
    Maintenance,
    /// Blocked from sale.
    Blocked,
    /// Out of order.
    OutOfOrder,
}

impl RoomStatus {
    /// Returns true for the statuses that only an operational lock produces.
    pub fn is_operational(&self) -> bool {
        matches!(
            self,
            RoomStatus::Maintenance | RoomStatus::Blocked | RoomStatus::OutOfOrder
        )
    }

    /// The kebab-case label used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Reserved => "reserved",
            RoomStatus::PartiallyReserved => "partially-reserved",
            RoomStatus::Occupied => "occupied",
            RoomStatus::PartiallyOccupied => "partially-occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Deoccupied => "deoccupied",
            RoomStatus::PartiallyDeoccupied => "partially-deoccupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Blocked => "blocked",
            RoomStatus::OutOfOrder => "out-of-order",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operational lock that takes a room out of guest-driven status.
///
/// While a lock is present the room's status is the lock's status and the
/// guest rule table is not evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationalLock {
    /// Scheduled maintenance over a half-open window.
    Maintenance {
        /// The nights the room is under maintenance.
        window: DateRange,
        /// Why the room is under maintenance.
        reason: String,
    },
    /// Blocked from sale until a date, or indefinitely when `until` is absent.
    Blocked {
        /// Why the room is blocked.
        reason: String,
        /// The first date the room is no longer blocked.
        #[serde(default)]
        until: Option<NaiveDate>,
    },
    /// Out of order with no scheduled end.
    OutOfOrder {
        /// Why the room is out of order.
        reason: String,
    },
}

impl OperationalLock {
    /// The room status this lock imposes.
    pub fn status(&self) -> RoomStatus {
        match self {
            OperationalLock::Maintenance { .. } => RoomStatus::Maintenance,
            OperationalLock::Blocked { .. } => RoomStatus::Blocked,
            OperationalLock::OutOfOrder { .. } => RoomStatus::OutOfOrder,
        }
    }

    /// The free-text reason recorded with the lock.
    pub fn reason(&self) -> &str {
        match self {
            OperationalLock::Maintenance { reason, .. }
            | OperationalLock::Blocked { reason, .. }
            | OperationalLock::OutOfOrder { reason } => reason,
        }
    }

    /// Checks whether the lock applies to any night of `range`.
    pub fn overlaps(&self, range: &DateRange) -> bool {
        match self {
            OperationalLock::Maintenance { window, .. } => window.overlaps(range),
            OperationalLock::Blocked { until, .. } => match until {
                Some(until) => range.start < *until,
                None => true,
            },
            OperationalLock::OutOfOrder { .. } => true,
        }
    }

    /// Checks whether the lock applies on `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match self {
            OperationalLock::Maintenance { window, .. } => window.contains(date),
            OperationalLock::Blocked { until, .. } => until.is_none_or(|until| date < until),
            OperationalLock::OutOfOrder { .. } => true,
        }
    }

    /// A human-readable description used in availability reasons.
    pub fn describe(&self) -> String {
        match self {
            OperationalLock::Maintenance { window, reason } => {
                format!("Room under maintenance ({}): {}", window, reason)
            }
            OperationalLock::Blocked {
                reason,
                until: Some(until),
            } => format!("Room blocked until {}: {}", until, reason),
            OperationalLock::Blocked { reason, until: None } => {
                format!("Room blocked: {}", reason)
            }
            OperationalLock::OutOfOrder { reason } => format!("Room out of order: {}", reason),
        }
    }
}

/// A category of room with a default nightly rate and capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    /// Unique identifier for the room type.
    pub id: String,
    /// Display name (e.g., "Deluxe King").
    pub name: String,
    /// The default nightly rate for rooms of this type.
    pub base_rate: Decimal,
    /// The default capacity for rooms of this type.
    pub capacity: u32,
    /// Amenities offered by rooms of this type.
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// A bookable room.
///
/// # Example
///
/// ```
/// use occupancy_engine::models::{Room, RoomStatus};
/// use rust_decimal::Decimal;
///
/// let room = Room::new("room_101", "hotel_1", "101", 2, "standard");
/// assert_eq!(room.status, RoomStatus::Available);
/// assert_eq!(room.floor(), Some(1));
/// assert_eq!(room.nightly_rate(Decimal::new(120, 0)), Decimal::new(120, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: String,
    /// The hotel this room belongs to.
    pub hotel_id: String,
    /// The room number as shown to guests (e.g., "204").
    pub number: String,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Optional nightly rate overriding the room type's base rate.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// The room type this room belongs to.
    pub room_type_id: String,
    /// Current occupancy status (derived).
    #[serde(default = "default_status")]
    pub status: RoomStatus,
    /// Whether the room stays open to further guests (derived).
    #[serde(default)]
    pub keep_open: bool,
    /// Ids of guests assigned to the room (derived cache).
    #[serde(default)]
    pub assigned_guest_ids: Vec<String>,
    /// Optional operational lock; authoritative over guest-derived status.
    #[serde(default)]
    pub operational_lock: Option<OperationalLock>,
}

fn default_status() -> RoomStatus {
    RoomStatus::Available
}

impl Room {
    /// Creates an unlocked, empty room with no rate override.
    pub fn new(
        id: impl Into<String>,
        hotel_id: impl Into<String>,
        number: impl Into<String>,
        capacity: u32,
        room_type_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            number: number.into(),
            capacity,
            rate: None,
            room_type_id: room_type_id.into(),
            status: RoomStatus::Available,
            keep_open: false,
            assigned_guest_ids: Vec::new(),
            operational_lock: None,
        }
    }

    /// Returns the room's nightly rate, falling back to the type's base rate.
    pub fn nightly_rate(&self, base_rate: Decimal) -> Decimal {
        self.rate.unwrap_or(base_rate)
    }

    /// Returns the floor, parsed from the leading digit of the room number.
    pub fn floor(&self) -> Option<u32> {
        self.number.trim().chars().next().and_then(|c| c.to_digit(10))
    }
}
