//! Room recommendation and assignment plan models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A preference for a floor band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorPreference {
    /// Close to the ground.
    Low,
    /// Further up.
    High,
}

/// Optional guest preferences used when ranking rooms.
///
/// # Example
///
/// ```
/// use occupancy_engine::models::{FloorPreference, RoomPreferences};
///
/// let preferences = RoomPreferences {
///     room_types: vec!["deluxe".to_string()],
///     amenities: vec!["balcony".to_string()],
///     floor: Some(FloorPreference::High),
/// };
/// assert!(preferences.prefers_room_type("deluxe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomPreferences {
    /// Preferred room type ids.
    #[serde(default)]
    pub room_types: Vec<String>,
    /// Wanted amenities.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Wanted floor band.
    #[serde(default)]
    pub floor: Option<FloorPreference>,
}

impl RoomPreferences {
    /// Checks whether `room_type_id` is one of the preferred types.
    pub fn prefers_room_type(&self, room_type_id: &str) -> bool {
        self.room_types.iter().any(|id| id == room_type_id)
    }
}

/// How an assignment plan was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStrategy {
    /// The whole party in the best single room that fits.
    SingleRoom,
    /// The party split across the two best rooms for two or more.
    SplitAcrossTwo,
}

/// A room and the share of the party placed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAllocation {
    /// The room.
    pub room_id: String,
    /// The room's capacity.
    pub capacity: u32,
    /// Guests placed in the room.
    pub guests: u32,
    /// `guests / capacity`, as a fraction.
    pub utilization: Decimal,
    /// The room's recommendation score.
    pub score: u8,
}

/// A candidate partition of a guest party across rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// How the plan was generated.
    pub strategy: AssignmentStrategy,
    /// The rooms used, with per-room utilization.
    pub allocations: Vec<RoomAllocation>,
    /// Guests the plan could not place.
    pub unplaced_guests: u32,
    /// Total reservation price for the plan's rooms, taxes and fees included.
    pub total_price: Decimal,
    /// The plan's ranking score.
    pub match_score: u8,
    /// Why this plan was suggested.
    pub rationale: String,
}
