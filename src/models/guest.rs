//! Guest model and related types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Where a guest is in their stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    /// Booked but not yet arrived.
    Booked,
    /// In house.
    CheckedIn,
    /// Departed.
    CheckedOut,
}

/// A guest assigned to a room.
///
/// The `room_id` reference is the only authoritative link between guests and
/// rooms; `Room::assigned_guest_ids` is rebuilt from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier for the guest.
    pub id: String,
    /// The room the guest is assigned to.
    pub room_id: String,
    /// The reservation that brought the guest in, if known.
    #[serde(default)]
    pub reservation_id: Option<String>,
    /// Where the guest is in their stay.
    pub status: GuestStatus,
    /// Whether this guest leaves the room open to further guests.
    #[serde(default)]
    pub keep_open: bool,
    /// First night of the booked stay.
    pub reservation_start: NaiveDate,
    /// Booked departure date.
    pub reservation_end: NaiveDate,
    /// When the guest actually checked in.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// When the guest actually checked out.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

impl Guest {
    /// Creates a booked guest with no actual check-in or check-out.
    pub fn booked(
        id: impl Into<String>,
        room_id: impl Into<String>,
        reservation_start: NaiveDate,
        reservation_end: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            room_id: room_id.into(),
            reservation_id: None,
            status: GuestStatus::Booked,
            keep_open: false,
            reservation_start,
            reservation_end,
            check_in: None,
            check_out: None,
        }
    }

    /// The booked stay as a half-open range.
    pub fn stay(&self) -> DateRange {
        DateRange::new(self.reservation_start, self.reservation_end)
    }

    /// The nights a checked-in guest holds the room: from the actual
    /// check-in date (or the booked start) up to the booked departure.
    pub fn occupied_window(&self) -> DateRange {
        let start = self
            .check_in
            .map(|at| at.date())
            .unwrap_or(self.reservation_start);
        DateRange::new(start, self.reservation_end)
    }

    /// Day-level presence: the departure day still counts.
    pub fn is_present_on(&self, date: NaiveDate) -> bool {
        self.stay().contains_inclusive(date)
    }
}
