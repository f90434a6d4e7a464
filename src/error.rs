//! Error types for the occupancy engine.
//!
//! The calculation functions themselves are total and report unavailability
//! through result fields. These errors cover the edges around them: loading
//! tariff configuration, validating ingested records, and looking records up
//! in an [`Inventory`](crate::inventory::Inventory).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the occupancy engine.
///
/// # Example
///
/// ```
/// use occupancy_engine::error::EngineError;
///
/// let error = EngineError::RoomNotFound {
///     room_id: "room_101".to_string(),
/// };
/// assert_eq!(error.to_string(), "Room not found: room_101");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An ingested record failed validation before reaching the engine.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date range ended on or before it started.
    #[error("Invalid date range: check-out {end} is not after check-in {start}")]
    InvalidDateRange {
        /// The first night of the range.
        start: NaiveDate,
        /// The exclusive end of the range.
        end: NaiveDate,
    },

    /// A room id did not resolve to a known room.
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The room id that was not found.
        room_id: String,
    },

    /// A guest id did not resolve to a known guest.
    #[error("Guest not found: {guest_id}")]
    GuestNotFound {
        /// The guest id that was not found.
        guest_id: String,
    },

    /// A reservation id did not resolve to a known reservation.
    #[error("Reservation not found: {reservation_id}")]
    ReservationNotFound {
        /// The reservation id that was not found.
        reservation_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/tariff.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tariff.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = EngineError::Validation {
            field: "capacity".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation failed for 'capacity': must be at least 1"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: check-out 2024-03-10 is not after check-in 2024-03-15"
        );
    }

    #[test]
    fn test_lookup_errors_display_ids() {
        let guest = EngineError::GuestNotFound {
            guest_id: "guest_7".to_string(),
        };
        let reservation = EngineError::ReservationNotFound {
            reservation_id: "res_9".to_string(),
        };
        assert_eq!(guest.to_string(), "Guest not found: guest_7");
        assert_eq!(reservation.to_string(), "Reservation not found: res_9");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_room_not_found() -> EngineResult<()> {
            Err(EngineError::RoomNotFound {
                room_id: "room_x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_room_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
