//! Reservation model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// The lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    /// Open and holding its rooms.
    Active,
    /// Cancelled before arrival.
    Cancelled,
    /// Stay finished normally.
    Completed,
    /// Guest never arrived.
    NoShow,
    /// Ended early by the hotel.
    Terminated,
}

impl ReservationStatus {
    /// Returns true for every state that has released its guests.
    pub fn is_closed(&self) -> bool {
        !matches!(self, ReservationStatus::Active)
    }
}

/// A reservation covering one or more rooms over a date window.
///
/// # Example
///
/// ```
/// use occupancy_engine::models::{Reservation, ReservationStatus};
/// use chrono::NaiveDate;
///
/// let reservation = Reservation {
///     id: "res_001".to_string(),
///     room_ids: vec!["room_101".to_string()],
///     guest_ids: vec!["guest_1".to_string()],
///     check_in_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     check_out_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     status: ReservationStatus::Active,
/// };
///
/// assert!(reservation.holds_room("room_101"));
/// assert_eq!(reservation.window().nights(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: String,
    /// Rooms held by the reservation.
    pub room_ids: Vec<String>,
    /// Guests travelling on the reservation.
    #[serde(default)]
    pub guest_ids: Vec<String>,
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Departure date (exclusive for availability purposes).
    pub check_out_date: NaiveDate,
    /// Lifecycle state.
    pub status: ReservationStatus,
}

impl Reservation {
    /// The stay as a half-open range.
    pub fn window(&self) -> DateRange {
        DateRange::new(self.check_in_date, self.check_out_date)
    }

    /// Checks whether the reservation references `room_id`.
    pub fn references_room(&self, room_id: &str) -> bool {
        self.room_ids.iter().any(|id| id == room_id)
    }

    /// Checks whether the reservation is active and references `room_id`.
    pub fn holds_room(&self, room_id: &str) -> bool {
        self.status == ReservationStatus::Active && self.references_room(room_id)
    }

    /// Active and completed reservations are part of a room's history;
    /// cancelled, no-show and terminated ones never occupied it.
    pub fn counts_as_stay(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Active | ReservationStatus::Completed
        )
    }
}
