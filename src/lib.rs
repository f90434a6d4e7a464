//! Room occupancy, availability and stay pricing engine.
//!
//! This crate derives hotel room occupancy status from guest lifecycle
//! states, checks room availability for future stays against existing
//! reservations, prices stays with an ordered and audited breakdown, and
//! recommends rooms and multi-room assignments for a guest party.
//!
//! The calculation functions are pure. [`inventory::Inventory`] applies
//! lifecycle changes and recomputes affected rooms, and [`api`] exposes the
//! operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
