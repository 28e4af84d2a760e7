//! Reward and emission arithmetic.
//!
//! Pure integer math over `u128`. Every operation is checked; a result that
//! does not fit is an error, never a wrapped value.

use crate::error::{Result, RewardError};
use crate::params::RewardParams;
use crate::types::VehicleType;

/// Computed figures for one ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardQuote {
    pub reward_amount: u128,
    pub emission_saved: u128,
}

/// `distance * base_reward_rate * multiplier + bonus`, where the bonus is
/// `bike_bonus` for bikes and zero otherwise.
pub fn compute_reward(
    params: &RewardParams,
    distance: u64,
    vehicle_type: VehicleType,
    multiplier: u32,
) -> Result<u128> {
    let bonus = if vehicle_type.earns_bike_bonus() {
        params.bike_bonus
    } else {
        0
    };

    u128::from(distance)
        .checked_mul(u128::from(params.base_reward_rate))
        .and_then(|v| v.checked_mul(u128::from(multiplier)))
        .and_then(|v| v.checked_add(u128::from(bonus)))
        .ok_or(RewardError::ArithmeticOverflow("reward amount"))
}

/// `distance * emission_factor`.
pub fn compute_emission_saved(distance: u64, emission_factor: u64) -> u128 {
    // u64 * u64 always fits in u128.
    u128::from(distance) * u128::from(emission_factor)
}

/// Compute both figures for a validated ride.
pub fn quote(
    params: &RewardParams,
    distance: u64,
    vehicle_type: VehicleType,
    multiplier: u32,
    emission_factor: u64,
) -> Result<RewardQuote> {
    Ok(RewardQuote {
        reward_amount: compute_reward(params, distance, vehicle_type, multiplier)?,
        emission_saved: compute_emission_saved(distance, emission_factor),
    })
}
