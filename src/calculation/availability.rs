//! Room availability over a requested date range.
//!
//! Conflicts use half-open windows: a stay checking out on day N never
//! conflicts with one checking in on day N.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{
    AvailabilityResult, Coverage, DateRange, Guest, GuestStatus, Reservation, Room, RoomType,
    UnavailabilityReason, UnavailabilitySource,
};

/// Checks whether `room` is free for every night of `range`.
///
/// # Behavior
///
/// 1. An operational lock overlapping the range blocks the whole range; no
///    further checks run.
/// 2. Every active reservation referencing the room that overlaps the range
///    contributes its shared nights and one reason.
/// 3. Checked-in guests of the room whose occupied window
///    `[check-in, booked departure)` overlaps the range contribute their
///    shared nights and a single "currently occupied" reason.
/// 4. Dates are sorted and de-duplicated.
///
/// # Example
///
/// ```
/// use occupancy_engine::calculation::check_availability;
/// use occupancy_engine::models::{DateRange, Reservation, ReservationStatus, Room};
/// use chrono::NaiveDate;
///
/// let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let room = Room::new("room_101", "hotel_1", "101", 2, "standard");
/// let reservation = Reservation {
///     id: "res_1".to_string(),
///     room_ids: vec!["room_101".to_string()],
///     guest_ids: vec![],
///     check_in_date: day(10),
///     check_out_date: day(15),
///     status: ReservationStatus::Active,
/// };
///
/// let blocked = check_availability(&room, &DateRange::new(day(12), day(16)), &[reservation.clone()], &[]);
/// assert!(!blocked.is_available);
/// assert_eq!(blocked.unavailable_dates, vec![day(12), day(13), day(14)]);
///
/// // Same-day turnover is allowed.
/// let turnover = check_availability(&room, &DateRange::new(day(15), day(18)), &[reservation], &[]);
/// assert!(turnover.is_available);
/// ```
pub fn check_availability(
    room: &Room,
    range: &DateRange,
    reservations: &[Reservation],
    guests: &[Guest],
) -> AvailabilityResult {
    if let Some(lock) = room.operational_lock.as_ref().filter(|l| l.overlaps(range)) {
        return AvailabilityResult {
            room_id: room.id.clone(),
            date_range: *range,
            is_available: false,
            coverage: Coverage::FullyBlocked,
            unavailable_dates: range.dates().collect(),
            reasons: vec![UnavailabilityReason {
                source: UnavailabilitySource::OperationalLock,
                reference: None,
                message: lock.describe(),
            }],
        };
    }

    let mut dates = BTreeSet::new();
    let mut reasons = Vec::new();

    for reservation in reservations.iter().filter(|r| r.holds_room(&room.id)) {
        let window = reservation.window();
        if let Some(shared) = window.intersection(range) {
            dates.extend(shared.dates());
            reasons.push(UnavailabilityReason {
                source: UnavailabilitySource::Reservation,
                reference: Some(reservation.id.clone()),
                message: format!("Reserved by reservation {} ({})", reservation.id, window),
            });
        }
    }

    let mut occupying = Vec::new();
    for guest in guests
        .iter()
        .filter(|g| g.room_id == room.id && g.status == GuestStatus::CheckedIn)
    {
        if let Some(shared) = guest.occupied_window().intersection(range) {
            dates.extend(shared.dates());
            occupying.push(guest.id.as_str());
        }
    }
    if !occupying.is_empty() {
        reasons.push(UnavailabilityReason {
            source: UnavailabilitySource::CheckedInGuests,
            reference: None,
            message: format!("Currently occupied by guests: {}", occupying.join(", ")),
        });
    }

    let unavailable_dates: Vec<NaiveDate> = dates.into_iter().collect();
    let coverage = coverage_for(unavailable_dates.len(), range.nights());

    AvailabilityResult {
        room_id: room.id.clone(),
        date_range: *range,
        is_available: unavailable_dates.is_empty(),
        coverage,
        unavailable_dates,
        reasons,
    }
}

fn coverage_for(blocked_nights: usize, nights: u32) -> Coverage {
    if blocked_nights == 0 {
        Coverage::Available
    } else if blocked_nights >= nights as usize {
        Coverage::FullyBlocked
    } else {
        Coverage::PartiallyBlocked
    }
}

/// Returns the rooms free for the whole of `range`, in input order.
///
/// Rooms whose room type is not in `room_types` are left out rather than
/// failing the call.
pub fn find_available_rooms<'a>(
    rooms: &'a [Room],
    room_types: &[RoomType],
    range: &DateRange,
    reservations: &[Reservation],
    guests: &[Guest],
) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| room_types.iter().any(|t| t.id == room.room_type_id))
        .filter(|room| check_availability(room, range, reservations, guests).is_available)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationalLock, ReservationStatus};
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(make_date(start), make_date(end))
    }

    fn make_room(id: &str) -> Room {
        Room::new(id, "hotel_1", "101", 2, "standard")
    }

    fn make_reservation(id: &str, room_id: &str, start: &str, end: &str) -> Reservation {
        Reservation {
            id: id.to_string(),
            room_ids: vec![room_id.to_string()],
            guest_ids: vec![],
            check_in_date: make_date(start),
            check_out_date: make_date(end),
            status: ReservationStatus::Active,
        }
    }

    fn checked_in_guest(id: &str, check_in: &str, end: &str) -> Guest {
        let mut guest = Guest::booked(id, "room_101", make_date(check_in), make_date(end));
        guest.status = GuestStatus::CheckedIn;
        guest.check_in = Some(make_date(check_in).and_hms_opt(14, 0, 0).unwrap());
        guest
    }

    // ==========================================================================
    // Reservation conflicts
    // ==========================================================================

    #[test]
    fn test_no_reservations_is_available() {
        let result = check_availability(&make_room("room_101"), &range("2024-03-10", "2024-03-15"), &[], &[]);
        assert!(result.is_available);
        assert_eq!(result.coverage, Coverage::Available);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_overlapping_reservation_blocks_query() {
        let reservations = vec![make_reservation("res_1", "room_101", "2024-03-10", "2024-03-15")];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-08", "2024-03-11"),
            &reservations,
            &[],
        );
        assert!(!result.is_available);
        assert_eq!(result.coverage, Coverage::PartiallyBlocked);
        assert_eq!(result.unavailable_dates, vec![make_date("2024-03-10")]);
        assert_eq!(result.reasons.len(), 1);
        assert_eq!(result.reasons[0].reference.as_deref(), Some("res_1"));
        assert!(result.reasons[0].message.contains("res_1"));
    }

    #[test]
    fn test_same_day_turnover_does_not_conflict() {
        let reservations = vec![make_reservation("res_1", "room_101", "2024-03-10", "2024-03-15")];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-15", "2024-03-18"),
            &reservations,
            &[],
        );
        assert!(result.is_available);
    }

    #[test]
    fn test_query_ending_on_check_in_day_does_not_conflict() {
        let reservations = vec![make_reservation("res_1", "room_101", "2024-03-10", "2024-03-15")];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-07", "2024-03-10"),
            &reservations,
            &[],
        );
        assert!(result.is_available);
    }

    #[test]
    fn test_enclosing_reservation_fully_blocks() {
        let reservations = vec![make_reservation("res_1", "room_101", "2024-03-01", "2024-03-31")];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-10", "2024-03-12"),
            &reservations,
            &[],
        );
        assert_eq!(result.coverage, Coverage::FullyBlocked);
        assert_eq!(result.unavailable_dates.len(), 2);
    }

    #[test]
    fn test_other_rooms_and_closed_reservations_are_ignored() {
        let mut cancelled = make_reservation("res_2", "room_101", "2024-03-10", "2024-03-15");
        cancelled.status = ReservationStatus::Cancelled;
        let reservations = vec![
            make_reservation("res_1", "room_202", "2024-03-10", "2024-03-15"),
            cancelled,
        ];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-10", "2024-03-15"),
            &reservations,
            &[],
        );
        assert!(result.is_available);
    }

    #[test]
    fn test_overlapping_reservations_dates_are_deduplicated_and_sorted() {
        let reservations = vec![
            make_reservation("res_b", "room_101", "2024-03-12", "2024-03-14"),
            make_reservation("res_a", "room_101", "2024-03-10", "2024-03-13"),
        ];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-10", "2024-03-20"),
            &reservations,
            &[],
        );
        assert_eq!(
            result.unavailable_dates,
            vec![
                make_date("2024-03-10"),
                make_date("2024-03-11"),
                make_date("2024-03-12"),
                make_date("2024-03-13"),
            ]
        );
        assert_eq!(result.reasons.len(), 2);
    }

    // ==========================================================================
    // Checked-in guests
    // ==========================================================================

    #[test]
    fn test_checked_in_guests_block_their_remaining_nights() {
        let guests = vec![checked_in_guest("g1", "2024-03-10", "2024-03-13")];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-12", "2024-03-14"),
            &[],
            &guests,
        );
        assert_eq!(result.unavailable_dates, vec![make_date("2024-03-12")]);
        assert_eq!(result.reasons[0].source, UnavailabilitySource::CheckedInGuests);
        assert!(result.reasons[0].message.contains("g1"));
    }

    #[test]
    fn test_booked_guests_do_not_count_as_occupying() {
        let guests = vec![Guest::booked(
            "g1",
            "room_101",
            make_date("2024-03-10"),
            make_date("2024-03-13"),
        )];
        let result = check_availability(
            &make_room("room_101"),
            &range("2024-03-10", "2024-03-13"),
            &[],
            &guests,
        );
        assert!(result.is_available);
    }

    // ==========================================================================
    // Operational locks
    // ==========================================================================

    #[test]
    fn test_overlapping_lock_blocks_entire_range() {
        let mut room = make_room("room_101");
        room.operational_lock = Some(OperationalLock::Maintenance {
            window: range("2024-03-12", "2024-03-13"),
            reason: "leak".to_string(),
        });
        let result = check_availability(&room, &range("2024-03-10", "2024-03-15"), &[], &[]);
        assert!(!result.is_available);
        assert_eq!(result.coverage, Coverage::FullyBlocked);
        assert_eq!(result.unavailable_dates.len(), 5);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].message.contains("leak"));
    }

    #[test]
    fn test_lock_outside_range_falls_through_to_reservations() {
        let mut room = make_room("room_101");
        room.operational_lock = Some(OperationalLock::Blocked {
            reason: "owner".to_string(),
            until: Some(make_date("2024-03-01")),
        });
        let result = check_availability(&room, &range("2024-03-10", "2024-03-15"), &[], &[]);
        assert!(result.is_available);
    }

    #[test]
    fn test_find_available_rooms_skips_unknown_types_and_booked_rooms() {
        let mut orphan = make_room("room_303");
        orphan.room_type_id = "missing".to_string();
        let rooms = vec![make_room("room_101"), make_room("room_202"), orphan];
        let room_types = vec![RoomType {
            id: "standard".to_string(),
            name: "Standard".to_string(),
            base_rate: Decimal::new(100, 0),
            capacity: 2,
            amenities: vec![],
        }];
        let reservations = vec![make_reservation("res_1", "room_101", "2024-03-10", "2024-03-15")];

        let free = find_available_rooms(
            &rooms,
            &room_types,
            &range("2024-03-11", "2024-03-12"),
            &reservations,
            &[],
        );
        let ids: Vec<&str> = free.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["room_202"]);
    }
}
