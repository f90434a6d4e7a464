//! Multi-room assignment planning.
//!
//! Builds candidate plans for placing a guest party into one or two rooms.
//! Callers pass the rooms already known to be free for the stay, typically
//! the output of [`find_available_rooms`](super::find_available_rooms).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{
    AssignmentPlan, AssignmentStrategy, DateRange, Room, RoomAllocation, RoomPreferences, RoomType,
};

use super::reservation_pricing::calculate_pricing;
use super::room_scoring::{RankedRoom, rank_rooms};

/// Smallest room capacity considered when splitting a party across two rooms.
pub const SPLIT_MIN_CAPACITY: u32 = 2;

fn allocation(ranked: &RankedRoom<'_>, guests: u32) -> RoomAllocation {
    let capacity = ranked.room.capacity;
    let utilization = if capacity == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(guests) / Decimal::from(capacity)).round_dp(2)
    };
    RoomAllocation {
        room_id: ranked.room.id.clone(),
        capacity,
        guests,
        utilization,
        score: ranked.score,
    }
}

/// Suggests assignment plans for `total_guests`, best first.
///
/// * Single room: the best-scored room whose capacity holds the whole party.
/// * Split across two (parties larger than two): the first two ranked rooms
///   holding at least two guests each. Guests fill the first room, then the
///   second; any left over are reported as `unplaced_guests`. The plan score
///   is the rounded average of both room scores.
///
/// Each plan's `total_price` is the full reservation price of its rooms,
/// taxes and fees included. Plans are sorted by `match_score` descending.
pub fn suggest_assignments(
    rooms: &[Room],
    room_types: &[RoomType],
    total_guests: u32,
    range: &DateRange,
    preferences: Option<&RoomPreferences>,
    config: &EngineConfig,
    today: NaiveDate,
) -> Vec<AssignmentPlan> {
    let ranked = rank_rooms(rooms, room_types, total_guests, preferences);
    let mut plans = Vec::new();

    if let Some(best) = ranked.iter().find(|r| r.room.capacity >= total_guests) {
        let pricing = calculate_pricing(
            std::slice::from_ref(best.room),
            room_types,
            range,
            config,
            today,
        );
        plans.push(AssignmentPlan {
            strategy: AssignmentStrategy::SingleRoom,
            allocations: vec![allocation(best, total_guests)],
            unplaced_guests: 0,
            total_price: pricing.total,
            match_score: best.score,
            rationale: format!(
                "Room {} fits all {} guests (score {})",
                best.room.number, total_guests, best.score
            ),
        });
    }

    if total_guests > 2 {
        let pair: Vec<&RankedRoom<'_>> = ranked
            .iter()
            .filter(|r| r.room.capacity >= SPLIT_MIN_CAPACITY)
            .take(2)
            .collect();

        if let [first, second] = pair.as_slice() {
            let in_first = first.room.capacity.min(total_guests);
            let in_second = second.room.capacity.min(total_guests - in_first);
            let unplaced = total_guests - in_first - in_second;

            let pricing = calculate_pricing(
                &[first.room.clone(), second.room.clone()],
                room_types,
                range,
                config,
                today,
            );
            let match_score = ((u32::from(first.score) + u32::from(second.score) + 1) / 2) as u8;

            let mut rationale = format!(
                "Split {} guests across rooms {} and {} ({} + {})",
                total_guests, first.room.number, second.room.number, in_first, in_second
            );
            if unplaced > 0 {
                rationale.push_str(&format!("; {} guest(s) left unplaced", unplaced));
            }

            plans.push(AssignmentPlan {
                strategy: AssignmentStrategy::SplitAcrossTwo,
                allocations: vec![allocation(first, in_first), allocation(second, in_second)],
                unplaced_guests: unplaced,
                total_price: pricing.total,
                match_score,
                rationale,
            });
        }
    }

    plans.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    plans
}
