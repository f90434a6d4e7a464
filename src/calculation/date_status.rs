//! Date-scoped room status.
//!
//! Derives the status a room would show on an arbitrary calendar date from
//! the reservations and guests spanning that date, without touching the
//! stored room. Day-level display counts the departure date as occupied, so
//! both ends of a stay window are inclusive here. This differs on purpose
//! from the half-open windows used by the availability checker.

use chrono::NaiveDate;

use crate::models::{DateRange, Guest, Reservation, Room, RoomStatus, StatusSnapshot};

use super::room_status::{derive_keep_open, derive_room_status};

/// Computes the status of `room` on `date`.
///
/// # Behavior
///
/// - An operational lock covering `date` yields the lock's status.
/// - Guests of the room whose booked stay contains `date` (both ends
///   inclusive) are run through the occupancy rule table.
/// - If no guest is present but an active reservation for the room spans
///   the date, the room shows as `reserved`.
/// - Cancelled, no-show and terminated reservations are ignored.
///
/// # Example
///
/// ```
/// use occupancy_engine::calculation::status_for_date;
/// use occupancy_engine::models::{Guest, Room, RoomStatus};
/// use chrono::NaiveDate;
///
/// let room = Room::new("room_101", "hotel_1", "101", 2, "standard");
/// let guest = Guest::booked(
///     "guest_1",
///     "room_101",
///     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// );
///
/// // The departure day still shows the guest.
/// let checkout_day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let snapshot = status_for_date(&room, checkout_day, &[], &[guest]);
/// assert_eq!(snapshot.status, RoomStatus::Reserved);
/// assert_eq!(snapshot.guests_on_date, vec!["guest_1".to_string()]);
/// ```
pub fn status_for_date(
    room: &Room,
    date: NaiveDate,
    reservations: &[Reservation],
    guests: &[Guest],
) -> StatusSnapshot {
    let reservations_on_date: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.references_room(&room.id))
        .filter(|r| r.counts_as_stay())
        .filter(|r| r.window().contains_inclusive(date))
        .collect();

    let guests_on_date: Vec<&Guest> = guests
        .iter()
        .filter(|g| g.room_id == room.id && g.is_present_on(date))
        .collect();

    let keep_open = derive_keep_open(&guests_on_date);
    let status = match &room.operational_lock {
        Some(lock) if lock.covers(date) => lock.status(),
        _ if guests_on_date.is_empty() && reservations_on_date.iter().any(|r| r.holds_room(&room.id)) => {
            RoomStatus::Reserved
        }
        _ => derive_room_status(&guests_on_date, room.capacity),
    };

    StatusSnapshot {
        room_id: room.id.clone(),
        date,
        status,
        keep_open,
        guests_on_date: guests_on_date.iter().map(|g| g.id.clone()).collect(),
        reservations_on_date: reservations_on_date.iter().map(|r| r.id.clone()).collect(),
    }
}

/// Computes one snapshot per night of `range`, in date order.
pub fn status_calendar(
    room: &Room,
    range: &DateRange,
    reservations: &[Reservation],
    guests: &[Guest],
) -> Vec<StatusSnapshot> {
    range
        .dates()
        .map(|date| status_for_date(room, date, reservations, guests))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuestStatus, OperationalLock, ReservationStatus};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_room() -> Room {
        Room::new("room_101", "hotel_1", "101", 2, "standard")
    }

    fn make_guest(id: &str, start: &str, end: &str, status: GuestStatus) -> Guest {
        let mut guest = Guest::booked(id, "room_101", make_date(start), make_date(end));
        guest.status = status;
        guest
    }

    fn make_reservation(id: &str, start: &str, end: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            id: id.to_string(),
            room_ids: vec!["room_101".to_string()],
            guest_ids: vec![],
            check_in_date: make_date(start),
            check_out_date: make_date(end),
            status,
        }
    }

    #[test]
    fn test_empty_history_is_available() {
        let snapshot = status_for_date(&make_room(), make_date("2024-03-12"), &[], &[]);
        assert_eq!(snapshot.status, RoomStatus::Available);
        assert!(!snapshot.keep_open);
        assert!(snapshot.guests_on_date.is_empty());
        assert!(snapshot.reservations_on_date.is_empty());
    }

    #[test]
    fn test_only_guests_present_on_date_are_counted() {
        let guests = vec![
            make_guest("early", "2024-03-01", "2024-03-05", GuestStatus::CheckedOut),
            make_guest("now", "2024-03-10", "2024-03-15", GuestStatus::CheckedIn),
        ];
        let snapshot = status_for_date(&make_room(), make_date("2024-03-12"), &[], &guests);
        assert_eq!(snapshot.guests_on_date, vec!["now".to_string()]);
        assert_eq!(snapshot.status, RoomStatus::Occupied);
    }

    #[test]
    fn test_checkout_day_and_next_arrival_overlap_on_display() {
        let guests = vec![
            make_guest("leaving", "2024-03-10", "2024-03-15", GuestStatus::CheckedOut),
            make_guest("arriving", "2024-03-15", "2024-03-18", GuestStatus::Booked),
        ];
        let snapshot = status_for_date(&make_room(), make_date("2024-03-15"), &[], &guests);
        assert_eq!(snapshot.guests_on_date.len(), 2);
        assert_eq!(snapshot.status, RoomStatus::PartiallyDeoccupied);
    }

    #[test]
    fn test_reservation_without_guests_shows_reserved() {
        let reservations = vec![make_reservation(
            "res_1",
            "2024-03-10",
            "2024-03-15",
            ReservationStatus::Active,
        )];
        let snapshot = status_for_date(&make_room(), make_date("2024-03-15"), &reservations, &[]);
        assert_eq!(snapshot.status, RoomStatus::Reserved);
        assert_eq!(snapshot.reservations_on_date, vec!["res_1".to_string()]);
    }

    #[test]
    fn test_completed_reservation_is_history_but_not_reserved() {
        let reservations = vec![make_reservation(
            "res_1",
            "2024-03-10",
            "2024-03-15",
            ReservationStatus::Completed,
        )];
        let snapshot = status_for_date(&make_room(), make_date("2024-03-11"), &reservations, &[]);
        assert_eq!(snapshot.reservations_on_date, vec!["res_1".to_string()]);
        assert_eq!(snapshot.status, RoomStatus::Available);
    }

    #[test]
    fn test_cancelled_reservation_is_ignored() {
        let reservations = vec![make_reservation(
            "res_1",
            "2024-03-10",
            "2024-03-15",
            ReservationStatus::Cancelled,
        )];
        let snapshot = status_for_date(&make_room(), make_date("2024-03-11"), &reservations, &[]);
        assert!(snapshot.reservations_on_date.is_empty());
        assert_eq!(snapshot.status, RoomStatus::Available);
    }

    #[test]
    fn test_lock_only_applies_on_covered_dates() {
        let mut room = make_room();
        room.operational_lock = Some(OperationalLock::Maintenance {
            window: DateRange::new(make_date("2024-03-01"), make_date("2024-03-03")),
            reason: "carpets".to_string(),
        });
        let guests = vec![make_guest("g1", "2024-03-02", "2024-03-06", GuestStatus::Booked)];

        let during = status_for_date(&room, make_date("2024-03-02"), &[], &guests);
        let after = status_for_date(&room, make_date("2024-03-04"), &[], &guests);
        assert_eq!(during.status, RoomStatus::Maintenance);
        assert_eq!(after.status, RoomStatus::Reserved);
    }

    #[test]
    fn test_snapshot_does_not_mutate_room() {
        let room = make_room();
        let guests = vec![make_guest("g1", "2024-03-10", "2024-03-15", GuestStatus::CheckedIn)];
        let _ = status_for_date(&room, make_date("2024-03-11"), &[], &guests);
        assert_eq!(room, make_room());
    }

    #[test]
    fn test_calendar_has_one_snapshot_per_night() {
        let guests = vec![make_guest("g1", "2024-03-10", "2024-03-12", GuestStatus::Booked)];
        let range = DateRange::new(make_date("2024-03-09"), make_date("2024-03-14"));
        let calendar = status_calendar(&make_room(), &range, &[], &guests);

        let statuses: Vec<RoomStatus> = calendar.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                RoomStatus::Available,
                RoomStatus::Reserved,
                RoomStatus::Reserved,
                RoomStatus::Reserved, // departure day
                RoomStatus::Available,
            ]
        );
    }
}
