//! Performance benchmarks for the occupancy engine.
//!
//! Covers the pure calculation paths and the HTTP pricing endpoint:
//! - Room status recompute for a full room
//! - Availability search across a 200-room hotel
//! - Reservation pricing as stay length grows
//! - Pricing request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use occupancy_engine::api::{AppState, create_router};
use occupancy_engine::calculation::{
    calculate_pricing, find_available_rooms, recompute_room_status, suggest_assignments,
};
use occupancy_engine::config::ConfigLoader;
use occupancy_engine::models::{
    DateRange, Guest, GuestStatus, Reservation, ReservationStatus, Room, RoomType,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap() + Duration::days(offset)
}

fn room_types() -> Vec<RoomType> {
    vec![
        RoomType {
            id: "standard".to_string(),
            name: "Standard".to_string(),
            base_rate: Decimal::new(120, 0),
            capacity: 2,
            amenities: vec!["wifi".to_string()],
        },
        RoomType {
            id: "family".to_string(),
            name: "Family".to_string(),
            base_rate: Decimal::new(210, 0),
            capacity: 4,
            amenities: vec!["wifi".to_string(), "kitchenette".to_string()],
        },
    ]
}

/// Creates a hotel with `count` rooms over several floors.
fn create_rooms(count: usize) -> Vec<Room> {
    (0..count)
        .map(|i| {
            let floor = i / 20 + 1;
            let (capacity, room_type) = if i % 4 == 0 { (4, "family") } else { (2, "standard") };
            Room::new(
                format!("room_{:03}", i),
                "hotel_bench",
                format!("{}{:02}", floor, i % 20),
                capacity,
                room_type,
            )
        })
        .collect()
}

/// One active reservation for every third room, staggered across July.
fn create_reservations(rooms: &[Room]) -> Vec<Reservation> {
    rooms
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 == 0)
        .map(|(i, room)| {
            let start = (i % 20) as i64;
            Reservation {
                id: format!("res_{:03}", i),
                room_ids: vec![room.id.clone()],
                guest_ids: vec![],
                check_in_date: day(start),
                check_out_date: day(start + 3),
                status: ReservationStatus::Active,
            }
        })
        .collect()
}

/// Benchmark: Recompute a room holding a full party.
fn bench_recompute_room(c: &mut Criterion) {
    let room = Room::new("room_101", "hotel_bench", "101", 4, "family");
    let guests: Vec<Guest> = (0..4)
        .map(|i| {
            let mut guest = Guest::booked(format!("guest_{}", i), "room_101", day(0), day(3));
            if i % 2 == 0 {
                guest.status = GuestStatus::CheckedIn;
            }
            guest
        })
        .collect();

    c.bench_function("recompute_room_status", |b| {
        b.iter(|| recompute_room_status(black_box(&room), black_box(&guests)))
    });
}

/// Benchmark: Find free rooms in a 200-room hotel.
fn bench_availability_search(c: &mut Criterion) {
    let rooms = create_rooms(200);
    let reservations = create_reservations(&rooms);
    let types = room_types();
    let range = DateRange::new(day(5), day(9));

    let mut group = c.benchmark_group("availability");
    group.throughput(Throughput::Elements(rooms.len() as u64));
    group.bench_function("find_available_rooms_200", |b| {
        b.iter(|| {
            find_available_rooms(
                black_box(&rooms),
                &types,
                black_box(&range),
                &reservations,
                &[],
            )
            .len()
        })
    });
    group.finish();
}

/// Benchmark: Pricing cost as the stay grows.
fn bench_pricing_scaling(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
    let rooms = create_rooms(3);
    let types = room_types();
    let today = day(-45);

    let mut group = c.benchmark_group("pricing_scaling");
    for nights in [1i64, 3, 7, 14, 28] {
        let range = DateRange::new(day(0), day(nights));
        group.throughput(Throughput::Elements(nights as u64));
        group.bench_with_input(BenchmarkId::new("nights", nights), &range, |b, range| {
            b.iter(|| calculate_pricing(black_box(&rooms), &types, range, config.config(), today))
        });
    }
    group.finish();
}

/// Benchmark: Assignment plans for a party of five.
fn bench_assignment(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
    let rooms = create_rooms(40);
    let types = room_types();
    let range = DateRange::new(day(0), day(4));

    c.bench_function("suggest_assignments_40_rooms", |b| {
        b.iter(|| {
            suggest_assignments(
                black_box(&rooms),
                &types,
                5,
                &range,
                None,
                config.config(),
                day(-10),
            )
        })
    });
}

/// Benchmark: Pricing request through the HTTP router.
fn bench_pricing_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({
        "rooms": create_rooms(2),
        "room_types": room_types(),
        "check_in": "2024-07-05",
        "check_out": "2024-07-12",
        "today": "2024-05-01"
    })
    .to_string();

    c.bench_function("pricing_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/pricing")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_recompute_room,
    bench_availability_search,
    bench_pricing_scaling,
    bench_assignment,
    bench_pricing_endpoint,
);
criterion_main!(benches);
