//! Configuration types for stay pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weekend surcharge settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekendConfig {
    /// Surcharge per weekend night as a fraction of the nightly rate.
    pub surcharge: Decimal,
    /// Nights that count as weekend nights (the weekday of the night's date).
    pub nights: Vec<Weekday>,
}

/// A seasonal bracket keyed by check-in month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonBracket {
    /// The season's display name (e.g., "Peak season").
    pub name: String,
    /// Calendar months (1-12) covered by the bracket.
    pub months: Vec<u32>,
    /// Signed adjustment as a fraction of the base amount.
    pub adjustment: Decimal,
}

/// A length-of-stay discount tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayTier {
    /// Minimum nights for the tier to apply.
    pub min_nights: u32,
    /// Discount as a positive fraction of the base amount.
    pub discount: Decimal,
}

/// An early-booking discount tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingTier {
    /// Minimum days between booking and check-in.
    pub min_days_ahead: i64,
    /// Discount as a positive fraction of the base amount.
    pub discount: Decimal,
}

/// The stay tariff from tariff.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffConfig {
    /// Tariff name.
    pub name: String,
    /// Tariff version or effective date.
    pub version: String,
    /// Weekend surcharge settings.
    pub weekend: WeekendConfig,
    /// Seasonal brackets.
    #[serde(default)]
    pub seasons: Vec<SeasonBracket>,
    /// Length-of-stay tiers.
    #[serde(default)]
    pub length_of_stay: Vec<StayTier>,
    /// Early-booking tiers.
    #[serde(default)]
    pub early_booking: Vec<BookingTier>,
}

impl TariffConfig {
    /// Checks whether a night on `weekday` attracts the weekend surcharge.
    pub fn is_weekend_night(&self, weekday: Weekday) -> bool {
        self.weekend.nights.contains(&weekday)
    }

    /// Finds the first seasonal bracket covering `month`.
    pub fn season_for(&self, month: u32) -> Option<&SeasonBracket> {
        self.seasons.iter().find(|s| s.months.contains(&month))
    }

    /// Finds the largest length-of-stay tier reached by `nights`.
    pub fn stay_tier(&self, nights: u32) -> Option<&StayTier> {
        self.length_of_stay
            .iter()
            .filter(|t| nights >= t.min_nights)
            .max_by_key(|t| t.min_nights)
    }

    /// Finds the largest early-booking tier reached by `days_ahead`.
    pub fn booking_tier(&self, days_ahead: i64) -> Option<&BookingTier> {
        self.early_booking
            .iter()
            .filter(|t| days_ahead >= t.min_days_ahead)
            .max_by_key(|t| t.min_days_ahead)
    }
}

/// Tax rates as fractions of the subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    /// City occupancy tax.
    pub city: Decimal,
    /// State sales tax.
    pub state: Decimal,
    /// Tourism levy.
    pub tourism: Decimal,
}

impl TaxRates {
    /// The combined rate.
    pub fn combined(&self) -> Decimal {
        self.city + self.state + self.tourism
    }
}

/// Reservation-level fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Resort fee per night.
    pub resort_per_night: Decimal,
    /// Service fee as a fraction of the subtotal.
    pub service_rate: Decimal,
    /// Flat cleaning fee.
    pub cleaning: Decimal,
}

/// Charges configuration from charges.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargesConfig {
    /// Tax rates.
    pub taxes: TaxRates,
    /// Fee schedule.
    pub fees: FeeSchedule,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    tariff: TariffConfig,
    charges: ChargesConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(tariff: TariffConfig, charges: ChargesConfig) -> Self {
        Self { tariff, charges }
    }

    /// Returns the stay tariff.
    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }

    /// Returns the taxes and fees.
    pub fn charges(&self) -> &ChargesConfig {
        &self.charges
    }
}
