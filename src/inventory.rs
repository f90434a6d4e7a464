//! In-memory inventory of rooms, guests, reservations and room types.
//!
//! The calculation functions never mutate anything. [`Inventory`] is the
//! caller-side repository that applies guest and reservation lifecycle
//! changes and recomputes every affected room straight after, so stored
//! status never goes stale.
//!
//! Guests reference rooms by id; `Room::assigned_guest_ids` is only a cache
//! rebuilt on recompute.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::calculation::recompute;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Guest, GuestStatus, OperationalLock, Reservation, ReservationStatus, Room, RoomType,
};

/// Rooms, guests, reservations and room types keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    rooms: BTreeMap<String, Room>,
    room_types: BTreeMap<String, RoomType>,
    guests: BTreeMap<String, Guest>,
    reservations: BTreeMap<String, Reservation>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the room with `room_id`.
    pub fn room(&self, room_id: &str) -> EngineResult<&Room> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room_id: room_id.to_string(),
            })
    }

    /// Returns the guest with `guest_id`.
    pub fn guest(&self, guest_id: &str) -> EngineResult<&Guest> {
        self.guests
            .get(guest_id)
            .ok_or_else(|| EngineError::GuestNotFound {
                guest_id: guest_id.to_string(),
            })
    }

    /// Returns the reservation with `reservation_id`.
    pub fn reservation(&self, reservation_id: &str) -> EngineResult<&Reservation> {
        self.reservations
            .get(reservation_id)
            .ok_or_else(|| EngineError::ReservationNotFound {
                reservation_id: reservation_id.to_string(),
            })
    }

    /// All rooms, ordered by id.
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.values().cloned().collect()
    }

    /// All room types, ordered by id.
    pub fn room_types(&self) -> Vec<RoomType> {
        self.room_types.values().cloned().collect()
    }

    /// All guests, ordered by id.
    pub fn guests(&self) -> Vec<Guest> {
        self.guests.values().cloned().collect()
    }

    /// All reservations, ordered by id.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.values().cloned().collect()
    }

    /// Guests whose `room_id` references `room_id`.
    pub fn guests_for_room(&self, room_id: &str) -> Vec<&Guest> {
        self.guests.values().filter(|g| g.room_id == room_id).collect()
    }

    /// Reservations of any status referencing `room_id`.
    pub fn reservations_for_room(&self, room_id: &str) -> Vec<&Reservation> {
        self.reservations
            .values()
            .filter(|r| r.references_room(room_id))
            .collect()
    }

    /// Adds or replaces a room type.
    pub fn insert_room_type(&mut self, room_type: RoomType) {
        self.room_types.insert(room_type.id.clone(), room_type);
    }

    /// Adds or replaces a room and recomputes it against its guests.
    pub fn insert_room(&mut self, mut room: Room) -> &Room {
        let guests = self.owned_guests_for(&room.id);
        recompute(&room, &guests).apply_to(&mut room);
        let room_id = room.id.clone();
        self.rooms.insert(room_id.clone(), room);
        &self.rooms[&room_id]
    }

    /// Adds or replaces a guest and recomputes the guest's room.
    pub fn insert_guest(&mut self, guest: Guest) -> EngineResult<&Room> {
        self.room(&guest.room_id)?;
        let previous_room = self
            .guests
            .insert(guest.id.clone(), guest.clone())
            .map(|old| old.room_id)
            .filter(|old_room| *old_room != guest.room_id);
        if let Some(old_room) = previous_room {
            self.refresh(&old_room)?;
        }
        self.refresh(&guest.room_id)
    }

    /// Adds or replaces a reservation. Every referenced room must exist.
    pub fn insert_reservation(&mut self, reservation: Reservation) -> EngineResult<()> {
        if reservation.check_out_date <= reservation.check_in_date {
            return Err(EngineError::InvalidDateRange {
                start: reservation.check_in_date,
                end: reservation.check_out_date,
            });
        }
        for room_id in &reservation.room_ids {
            self.room(room_id)?;
        }
        self.reservations
            .insert(reservation.id.clone(), reservation);
        Ok(())
    }

    /// Marks a guest checked in at `at` and recomputes their room.
    pub fn check_in_guest(&mut self, guest_id: &str, at: NaiveDateTime) -> EngineResult<&Room> {
        self.update_guest(guest_id, |guest| {
            guest.status = GuestStatus::CheckedIn;
            guest.check_in = Some(at);
        })
    }

    /// Marks a guest checked out at `at` and recomputes their room.
    pub fn check_out_guest(&mut self, guest_id: &str, at: NaiveDateTime) -> EngineResult<&Room> {
        self.update_guest(guest_id, |guest| {
            guest.status = GuestStatus::CheckedOut;
            guest.check_out = Some(at);
        })
    }

    /// Toggles a guest's keep-open flag and recomputes their room.
    pub fn set_guest_keep_open(&mut self, guest_id: &str, keep_open: bool) -> EngineResult<&Room> {
        self.update_guest(guest_id, |guest| guest.keep_open = keep_open)
    }

    /// Deletes a guest and recomputes the room they were in.
    pub fn remove_guest(&mut self, guest_id: &str) -> EngineResult<Guest> {
        let guest = self
            .guests
            .remove(guest_id)
            .ok_or_else(|| EngineError::GuestNotFound {
                guest_id: guest_id.to_string(),
            })?;
        if self.rooms.contains_key(&guest.room_id) {
            self.refresh(&guest.room_id)?;
        }
        Ok(guest)
    }

    /// Moves a guest to another room, recomputing both rooms.
    pub fn move_guest(&mut self, guest_id: &str, to_room_id: &str) -> EngineResult<&Room> {
        self.room(to_room_id)?;
        let guest = self
            .guests
            .get_mut(guest_id)
            .ok_or_else(|| EngineError::GuestNotFound {
                guest_id: guest_id.to_string(),
            })?;
        let from_room_id = std::mem::replace(&mut guest.room_id, to_room_id.to_string());
        if from_room_id != to_room_id && self.rooms.contains_key(&from_room_id) {
            self.refresh(&from_room_id)?;
        }
        self.refresh(to_room_id)
    }

    /// Closes a reservation and releases its guests.
    ///
    /// `status` must be one of the closed states. Guests listed on the
    /// reservation, or linked to it through `reservation_id`, are removed and
    /// every room they occupied is recomputed. Returns the released guests.
    pub fn close_reservation(
        &mut self,
        reservation_id: &str,
        status: ReservationStatus,
    ) -> EngineResult<Vec<Guest>> {
        if !status.is_closed() {
            return Err(EngineError::Validation {
                field: "status".to_string(),
                message: format!("{:?} does not close a reservation", status),
            });
        }
        let reservation = self
            .reservations
            .get_mut(reservation_id)
            .ok_or_else(|| EngineError::ReservationNotFound {
                reservation_id: reservation_id.to_string(),
            })?;
        reservation.status = status;
        let listed = reservation.guest_ids.clone();

        let released_ids: Vec<String> = self
            .guests
            .values()
            .filter(|g| {
                listed.contains(&g.id) || g.reservation_id.as_deref() == Some(reservation_id)
            })
            .map(|g| g.id.clone())
            .collect();

        let mut released = Vec::with_capacity(released_ids.len());
        let mut touched_rooms: Vec<String> = Vec::new();
        for guest_id in released_ids {
            if let Some(guest) = self.guests.remove(&guest_id) {
                if !touched_rooms.contains(&guest.room_id) {
                    touched_rooms.push(guest.room_id.clone());
                }
                released.push(guest);
            }
        }
        for room_id in touched_rooms {
            if self.rooms.contains_key(&room_id) {
                self.refresh(&room_id)?;
            }
        }

        debug!(
            reservation_id = %reservation_id,
            status = ?status,
            released = released.len(),
            "Reservation closed"
        );
        Ok(released)
    }

    /// Sets or clears a room's operational lock and recomputes it.
    pub fn set_operational_lock(
        &mut self,
        room_id: &str,
        lock: Option<OperationalLock>,
    ) -> EngineResult<&Room> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room_id: room_id.to_string(),
            })?;
        room.operational_lock = lock;
        self.refresh(room_id)
    }

    /// Recomputes one room's derived fields.
    pub fn recompute_room(&mut self, room_id: &str) -> EngineResult<&Room> {
        self.refresh(room_id)
    }

    /// Recomputes every room.
    pub fn recompute_all(&mut self) {
        for room in self.rooms.values_mut() {
            let guests: Vec<Guest> = self
                .guests
                .values()
                .filter(|g| g.room_id == room.id)
                .cloned()
                .collect();
            recompute(room, &guests).apply_to(room);
        }
        debug!(rooms = self.rooms.len(), "All rooms recomputed");
    }

    fn update_guest(
        &mut self,
        guest_id: &str,
        apply: impl FnOnce(&mut Guest),
    ) -> EngineResult<&Room> {
        let guest = self
            .guests
            .get_mut(guest_id)
            .ok_or_else(|| EngineError::GuestNotFound {
                guest_id: guest_id.to_string(),
            })?;
        apply(guest);
        let room_id = guest.room_id.clone();
        self.refresh(&room_id)
    }

    fn owned_guests_for(&self, room_id: &str) -> Vec<Guest> {
        self.guests
            .values()
            .filter(|g| g.room_id == room_id)
            .cloned()
            .collect()
    }

    fn refresh(&mut self, room_id: &str) -> EngineResult<&Room> {
        let guests = self.owned_guests_for(room_id);
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room_id: room_id.to_string(),
            })?;
        let previous = room.status;
        recompute(room, &guests).apply_to(room);
        debug!(
            room_id = %room_id,
            previous = %previous,
            status = %room.status,
            keep_open = room.keep_open,
            guests = guests.len(),
            "Room recomputed"
        );
        Ok(room)
    }
}
