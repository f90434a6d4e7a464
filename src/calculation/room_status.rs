//! Room status derivation from assigned guests.
//!
//! A room's occupancy status is a pure function of its guests' lifecycle
//! states, the guest count and the room capacity. An operational lock, when
//! present, overrides the guest rule table entirely.

use serde::{Deserialize, Serialize};

use crate::models::{Guest, GuestStatus, Room, RoomStatus};

/// The derived fields of a room after recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatusOutcome {
    /// The derived status.
    pub status: RoomStatus,
    /// The derived keep-open flag.
    pub keep_open: bool,
    /// Ids of the guests whose `room_id` references the room.
    pub assigned_guest_ids: Vec<String>,
}

impl RoomStatusOutcome {
    /// Writes the derived fields onto `room`.
    pub fn apply_to(self, room: &mut Room) {
        room.status = self.status;
        room.keep_open = self.keep_open;
        room.assigned_guest_ids = self.assigned_guest_ids;
    }
}

#[derive(Debug, Default)]
struct GuestTally {
    total: usize,
    booked: usize,
    checked_in: usize,
    checked_out: usize,
    booked_closed: bool,
    checked_in_closed: bool,
}

impl GuestTally {
    fn from_guests(guests: &[&Guest]) -> Self {
        let mut tally = GuestTally {
            total: guests.len(),
            ..Default::default()
        };
        for guest in guests {
            match guest.status {
                GuestStatus::Booked => {
                    tally.booked += 1;
                    tally.booked_closed |= !guest.keep_open;
                }
                GuestStatus::CheckedIn => {
                    tally.checked_in += 1;
                    tally.checked_in_closed |= !guest.keep_open;
                }
                GuestStatus::CheckedOut => tally.checked_out += 1,
            }
        }
        tally
    }
}

/// Applies the occupancy rule table to a set of guests.
///
/// Rules are evaluated in strict priority order:
///
/// 1. no guests → `available`
/// 2. all checked out → `cleaning`
/// 3. some checked out alongside checked-in or booked guests → `partially-deoccupied`
/// 4. some checked out, nobody else → `deoccupied`
/// 5. all checked in → `occupied` at capacity or when any guest closes the
///    room (`keep_open = false`), else `partially-occupied`
/// 6. checked-in and booked guests mixed → `partially-occupied`
/// 7. all booked → `reserved` at capacity or when any guest closes the room,
///    else `partially-reserved`
/// 8. otherwise → `available`
///
/// Operational locks are not considered here; see [`recompute`].
///
/// # Example
///
/// ```
/// use occupancy_engine::calculation::derive_room_status;
/// use occupancy_engine::models::{Guest, RoomStatus};
/// use chrono::NaiveDate;
///
/// let mut guest = Guest::booked(
///     "guest_1",
///     "room_101",
///     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// );
/// guest.keep_open = true;
///
/// assert_eq!(derive_room_status(&[&guest], 2), RoomStatus::PartiallyReserved);
/// assert_eq!(derive_room_status(&[&guest], 1), RoomStatus::Reserved);
/// ```
pub fn derive_room_status(guests: &[&Guest], capacity: u32) -> RoomStatus {
    if guests.is_empty() {
        return RoomStatus::Available;
    }

    let tally = GuestTally::from_guests(guests);
    // Over-capacity rooms are treated as full.
    let at_capacity = tally.total >= capacity as usize;

    if tally.checked_out == tally.total {
        RoomStatus::Cleaning
    } else if tally.checked_out > 0 && (tally.checked_in > 0 || tally.booked > 0) {
        RoomStatus::PartiallyDeoccupied
    } else if tally.checked_out > 0 {
        // Shadowed by the cleaning rule for any non-empty set.
        RoomStatus::Deoccupied
    } else if tally.checked_in == tally.total {
        if at_capacity || tally.checked_in_closed {
            RoomStatus::Occupied
        } else {
            RoomStatus::PartiallyOccupied
        }
    } else if tally.checked_in > 0 && tally.booked > 0 {
        RoomStatus::PartiallyOccupied
    } else if tally.booked == tally.total {
        if at_capacity || tally.booked_closed {
            RoomStatus::Reserved
        } else {
            RoomStatus::PartiallyReserved
        }
    } else {
        RoomStatus::Available
    }
}

/// True iff there is at least one guest and every guest keeps the room open.
pub fn derive_keep_open(guests: &[&Guest]) -> bool {
    !guests.is_empty() && guests.iter().all(|g| g.keep_open)
}

/// Recomputes a room's derived fields from the guest list.
///
/// Only guests whose `room_id` matches the room are considered, so the
/// caller may pass a wider guest list. The returned `assigned_guest_ids`
/// always mirror that filtered set, correcting any stale cache.
///
/// When the room carries an operational lock, the lock's status is returned
/// and `keep_open` is left as stored; the guest rule table is not evaluated.
pub fn recompute(room: &Room, guests: &[Guest]) -> RoomStatusOutcome {
    let assigned: Vec<&Guest> = guests.iter().filter(|g| g.room_id == room.id).collect();
    let assigned_guest_ids = assigned.iter().map(|g| g.id.clone()).collect();

    if let Some(lock) = &room.operational_lock {
        return RoomStatusOutcome {
            status: lock.status(),
            keep_open: room.keep_open,
            assigned_guest_ids,
        };
    }

    RoomStatusOutcome {
        status: derive_room_status(&assigned, room.capacity),
        keep_open: derive_keep_open(&assigned),
        assigned_guest_ids,
    }
}

/// Returns a copy of `room` with its derived fields recomputed.
///
/// The caller must invoke this after every guest or room write that could
/// affect status, and must serialize writes to the same room.
pub fn recompute_room_status(room: &Room, guests: &[Guest]) -> Room {
    let mut updated = room.clone();
    recompute(room, guests).apply_to(&mut updated);
    updated
}
