//! Room recommendation scoring.
//!
//! Scores a room for a guest party on a 0-100 scale from capacity fit, room
//! type preference, price band, amenities and floor.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{FloorPreference, Room, RoomPreferences, RoomType};

/// Score every room starts from.
pub const BASE_SCORE: i32 = 50;

/// Highest floor that counts as a low floor.
pub const LOW_FLOOR_MAX: u32 = 2;

/// Lowest floor that counts as a high floor.
pub const HIGH_FLOOR_MIN: u32 = 5;

/// A room paired with its type and score.
#[derive(Debug, Clone, Copy)]
pub struct RankedRoom<'a> {
    /// The room.
    pub room: &'a Room,
    /// Its room type.
    pub room_type: &'a RoomType,
    /// The recommendation score.
    pub score: u8,
}

fn capacity_points(capacity: u32, guest_count: u32) -> i32 {
    if capacity < guest_count {
        return -40;
    }
    if capacity == 0 {
        return 10;
    }
    let utilization = Decimal::from(guest_count) / Decimal::from(capacity);
    if utilization >= Decimal::new(8, 1) {
        30
    } else if utilization >= Decimal::new(5, 1) {
        20
    } else {
        10
    }
}

fn price_points(nightly_rate: Decimal) -> i32 {
    if nightly_rate <= Decimal::ONE_HUNDRED {
        10
    } else if nightly_rate >= Decimal::new(200, 0) {
        5
    } else {
        0
    }
}

fn floor_matches(floor: u32, preference: FloorPreference) -> bool {
    match preference {
        FloorPreference::Low => floor <= LOW_FLOOR_MAX,
        FloorPreference::High => floor >= HIGH_FLOOR_MIN,
    }
}

/// Scores `room` for a party of `guest_count`, clamped to 0-100.
///
/// | Factor | Points |
/// |--------|--------|
/// | Utilization ≥ 80% / ≥ 50% / lower | +30 / +20 / +10 |
/// | Capacity below party size | −40 |
/// | Preferred room type | +15 |
/// | Nightly rate ≤ $100 / ≥ $200 | +10 / +5 |
/// | Each requested amenity present | +2 |
/// | Floor matches low/high preference | +5 |
pub fn score_room(
    room: &Room,
    room_type: &RoomType,
    guest_count: u32,
    preferences: Option<&RoomPreferences>,
) -> u8 {
    let mut score = BASE_SCORE;
    score += capacity_points(room.capacity, guest_count);
    score += price_points(room.nightly_rate(room_type.base_rate));

    if let Some(preferences) = preferences {
        if preferences.prefers_room_type(&room_type.id) {
            score += 15;
        }

        let matched = preferences
            .amenities
            .iter()
            .filter(|wanted| room_type.amenities.contains(wanted))
            .count() as i32;
        score += 2 * matched;

        if let (Some(preference), Some(floor)) = (preferences.floor, room.floor()) {
            if floor_matches(floor, preference) {
                score += 5;
            }
        }
    }

    score.clamp(0, 100) as u8
}

/// Scores and sorts rooms best first; equal scores keep input order.
///
/// Rooms whose room type is missing from `room_types` are left out.
pub fn rank_rooms<'a>(
    rooms: &'a [Room],
    room_types: &'a [RoomType],
    guest_count: u32,
    preferences: Option<&RoomPreferences>,
) -> Vec<RankedRoom<'a>> {
    let types_by_id: HashMap<&str, &RoomType> =
        room_types.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut ranked: Vec<RankedRoom<'a>> = rooms
        .iter()
        .filter_map(|room| {
            let room_type = *types_by_id.get(room.room_type_id.as_str())?;
            Some(RankedRoom {
                room,
                room_type,
                score: score_room(room, room_type, guest_count, preferences),
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
