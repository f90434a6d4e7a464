//! Request types for the occupancy engine API.
//!
//! Each endpoint receives the records it needs in the body; nothing is
//! persisted between requests. Records are validated here, before any
//! calculation runs.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Guest, Reservation, Room, RoomPreferences, RoomType};

/// Request body for `POST /rooms/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusRequest {
    /// The room to recompute.
    pub room: Room,
    /// The guests assigned to the room.
    #[serde(default)]
    pub guests: Vec<Guest>,
}

/// Request body for `POST /rooms/status-on-date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOnDateRequest {
    /// The room to inspect.
    pub room: Room,
    /// The date to inspect.
    pub date: NaiveDate,
    /// Optional exclusive end date; when set, one snapshot per day from
    /// `date` up to `end_date` is returned.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Reservations that may reference the room.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// Guests that may be assigned to the room.
    #[serde(default)]
    pub guests: Vec<Guest>,
}

/// Request body for `POST /availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// Rooms to check.
    pub rooms: Vec<Room>,
    /// Room types for the rooms.
    pub room_types: Vec<RoomType>,
    /// First night requested.
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Existing reservations.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// Existing guests.
    #[serde(default)]
    pub guests: Vec<Guest>,
}

/// Request body for `POST /pricing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Rooms on the reservation.
    pub rooms: Vec<Room>,
    /// Room types for the rooms.
    pub room_types: Vec<RoomType>,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Booking date used for the early-booking discount; defaults to the
    /// server's current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Candidate rooms.
    pub rooms: Vec<Room>,
    /// Room types for the rooms.
    pub room_types: Vec<RoomType>,
    /// Number of guests in the party.
    pub party_size: u32,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Optional guest preferences.
    #[serde(default)]
    pub preferences: Option<RoomPreferences>,
    /// Existing reservations; rooms they hold are not recommended.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// Existing guests; rooms with overlapping checked-in guests are not
    /// recommended.
    #[serde(default)]
    pub guests: Vec<Guest>,
    /// Booking date used for pricing; defaults to the current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> EngineError {
    EngineError::Validation {
        field: field.into(),
        message: message.into(),
    }
}

fn validate_rooms(rooms: &[Room]) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for (i, room) in rooms.iter().enumerate() {
        if room.id.trim().is_empty() {
            return Err(invalid(format!("rooms[{}].id", i), "must not be empty"));
        }
        if room.capacity < 1 {
            return Err(invalid(
                format!("rooms[{}].capacity", i),
                format!("room {} must hold at least one guest", room.id),
            ));
        }
        if room.rate.is_some_and(|rate| rate.is_sign_negative()) {
            return Err(invalid(
                format!("rooms[{}].rate", i),
                format!("room {} has a negative rate", room.id),
            ));
        }
        if !seen.insert(room.id.as_str()) {
            return Err(invalid("rooms", format!("duplicate room id {}", room.id)));
        }
    }
    Ok(())
}

fn validate_room_types(room_types: &[RoomType]) -> EngineResult<()> {
    for (i, room_type) in room_types.iter().enumerate() {
        if room_type.base_rate.is_sign_negative() {
            return Err(invalid(
                format!("room_types[{}].base_rate", i),
                format!("room type {} has a negative base rate", room_type.id),
            ));
        }
    }
    Ok(())
}

fn validate_guests(guests: &[Guest], room_ids: &HashSet<&str>) -> EngineResult<()> {
    for (i, guest) in guests.iter().enumerate() {
        if !room_ids.contains(guest.room_id.as_str()) {
            return Err(invalid(
                format!("guests[{}].room_id", i),
                format!(
                    "guest {} references room {} which is not in the request",
                    guest.id, guest.room_id
                ),
            ));
        }
        if guest.reservation_end <= guest.reservation_start {
            return Err(invalid(
                format!("guests[{}].reservation_end", i),
                format!("guest {} departs on or before arrival", guest.id),
            ));
        }
    }
    Ok(())
}

fn validate_reservations(reservations: &[Reservation]) -> EngineResult<()> {
    for (i, reservation) in reservations.iter().enumerate() {
        if reservation.check_out_date <= reservation.check_in_date {
            return Err(invalid(
                format!("reservations[{}].check_out_date", i),
                format!(
                    "reservation {} checks out on or before check-in",
                    reservation.id
                ),
            ));
        }
    }
    Ok(())
}

fn room_id_set(rooms: &[Room]) -> HashSet<&str> {
    rooms.iter().map(|r| r.id.as_str()).collect()
}

impl RoomStatusRequest {
    /// Validates the room and that every guest belongs to it.
    pub fn validate(&self) -> EngineResult<()> {
        validate_rooms(std::slice::from_ref(&self.room))?;
        validate_guests(&self.guests, &HashSet::from([self.room.id.as_str()]))
    }
}

impl StatusOnDateRequest {
    /// Validates the records and returns the days to inspect.
    pub fn validate(&self) -> EngineResult<DateRange> {
        validate_rooms(std::slice::from_ref(&self.room))?;
        validate_reservations(&self.reservations)?;
        validate_guests(&self.guests, &HashSet::from([self.room.id.as_str()]))?;
        let end = self.end_date.unwrap_or(self.date + chrono::Duration::days(1));
        DateRange::try_new(self.date, end)
    }
}

impl AvailabilityRequest {
    /// Validates the records and returns the requested stay.
    pub fn validate(&self) -> EngineResult<DateRange> {
        let range = DateRange::try_new(self.check_in, self.check_out)?;
        validate_rooms(&self.rooms)?;
        validate_room_types(&self.room_types)?;
        validate_reservations(&self.reservations)?;
        validate_guests(&self.guests, &room_id_set(&self.rooms))?;
        Ok(range)
    }
}

impl PricingRequest {
    /// Validates the records and returns the stay to price.
    pub fn validate(&self) -> EngineResult<DateRange> {
        let range = DateRange::try_new(self.check_in, self.check_out)?;
        if self.rooms.is_empty() {
            return Err(invalid("rooms", "at least one room is required"));
        }
        validate_rooms(&self.rooms)?;
        validate_room_types(&self.room_types)?;
        Ok(range)
    }
}

impl RecommendationRequest {
    /// Validates the records and returns the requested stay.
    pub fn validate(&self) -> EngineResult<DateRange> {
        let range = DateRange::try_new(self.check_in, self.check_out)?;
        if self.party_size < 1 {
            return Err(invalid("party_size", "must be at least 1"));
        }
        validate_rooms(&self.rooms)?;
        validate_room_types(&self.room_types)?;
        validate_reservations(&self.reservations)?;
        validate_guests(&self.guests, &room_id_set(&self.rooms))?;
        Ok(range)
    }
}
