//! Scalar reward parameters and named defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RewardError};

/// Multiplier consumed for a vehicle type with no explicit entry.
pub const DEFAULT_MULTIPLIER: u32 = 100;

/// Emission factor consumed for a vehicle type with no explicit entry.
pub const DEFAULT_EMISSION_FACTOR: u64 = 0;

/// Upper bound (inclusive) on a configured multiplier.
pub const MAX_MULTIPLIER: u32 = 1000;

/// Scalar configuration feeding every reward calculation.
///
/// Hosts may load this from JSON; call [`RewardParams::validate`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardParams {
    /// Reward units per distance unit.
    pub base_reward_rate: u64,
    /// Flat addend for bike rides.
    pub bike_bonus: u64,
    /// Inclusive lower bound on accepted distance.
    pub min_distance: u64,
    /// Inclusive upper bound on accepted distance.
    pub max_distance: u64,
}

impl Default for RewardParams {
    fn default() -> Self {
        Self {
            base_reward_rate: 10,
            bike_bonus: 5,
            min_distance: 1,
            max_distance: 1000,
        }
    }
}

impl RewardParams {
    /// Check that every field is strictly positive and the bounds are ordered.
    pub fn validate(&self) -> Result<()> {
        if self.base_reward_rate == 0 {
            return Err(RewardError::InvalidRewardRate(self.base_reward_rate));
        }
        if self.bike_bonus == 0 {
            return Err(RewardError::InvalidRewardRate(self.bike_bonus));
        }
        validate_distance_bounds(self.min_distance, self.max_distance)
    }

    /// Whether `distance` is inside `[min_distance, max_distance]`.
    pub fn accepts_distance(&self, distance: u64) -> bool {
        (self.min_distance..=self.max_distance).contains(&distance)
    }
}

/// Distance bounds must be positive and ordered.
pub fn validate_distance_bounds(min: u64, max: u64) -> Result<()> {
    if min == 0 || min > max {
        return Err(RewardError::InvalidDistanceBounds { min, max });
    }
    Ok(())
}
