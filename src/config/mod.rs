//! Configuration loading and management for the occupancy engine.
//!
//! This module loads the stay tariff (weekend, seasonal, length-of-stay and
//! early-booking rules) and the reservation charges (taxes and fees) from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use occupancy_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded tariff: {}", loader.config().tariff().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BookingTier, ChargesConfig, EngineConfig, FeeSchedule, SeasonBracket, StayTier, TariffConfig,
    TaxRates, WeekendConfig,
};
