//! Golden reward vectors.
//!
//! Each vector fixes a configuration and a ride, and records the reward and
//! emission figures every implementation must produce.

use mobility_rewards::Result;

use crate::fixtures::TestFixture;

/// A golden reward vector.
#[derive(Debug, Clone)]
pub struct RewardVector {
    pub name: &'static str,
    pub vehicle_tag: &'static str,
    pub distance: u64,
    pub base_reward_rate: u64,
    pub bike_bonus: u64,
    /// `None` leaves the default multiplier in place.
    pub multiplier: Option<u32>,
    /// `None` leaves the default emission factor in place.
    pub emission_factor: Option<u64>,
    pub expected_reward: u128,
    pub expected_emission_saved: u128,
}

/// Get all golden reward vectors.
pub fn all_vectors() -> Vec<RewardVector> {
    vec![
        RewardVector {
            name: "electric, default multiplier",
            vehicle_tag: "electric",
            distance: 10,
            base_reward_rate: 10,
            bike_bonus: 5,
            multiplier: None,
            emission_factor: Some(100),
            expected_reward: 10_000,
            expected_emission_saved: 1_000,
        },
        RewardVector {
            name: "electric, multiplier 150",
            vehicle_tag: "electric",
            distance: 10,
            base_reward_rate: 10,
            bike_bonus: 5,
            multiplier: Some(150),
            emission_factor: Some(100),
            expected_reward: 15_000,
            expected_emission_saved: 1_000,
        },
        RewardVector {
            name: "bike adds bonus once",
            vehicle_tag: "bike",
            distance: 10,
            base_reward_rate: 10,
            bike_bonus: 5,
            multiplier: None,
            emission_factor: None,
            expected_reward: 10_005,
            expected_emission_saved: 0,
        },
        RewardVector {
            name: "bike at minimum distance",
            vehicle_tag: "bike",
            distance: 1,
            base_reward_rate: 20,
            bike_bonus: 10,
            multiplier: Some(1),
            emission_factor: Some(7),
            expected_reward: 30,
            expected_emission_saved: 7,
        },
        RewardVector {
            name: "public at maximum distance and multiplier",
            vehicle_tag: "public",
            distance: 1000,
            base_reward_rate: 10,
            bike_bonus: 5,
            multiplier: Some(1000),
            emission_factor: Some(42),
            expected_reward: 10_000_000,
            expected_emission_saved: 42_000,
        },
        RewardVector {
            name: "large base rate",
            vehicle_tag: "electric",
            distance: 1000,
            base_reward_rate: u64::MAX,
            bike_bonus: 5,
            multiplier: Some(1000),
            emission_factor: None,
            expected_reward: u64::MAX as u128 * 1_000_000,
            expected_emission_saved: 0,
        },
    ]
}

/// Configure a fresh fixture per `vector`, verify and reward one ride.
///
/// Returns `(reward_amount, emission_saved)`.
pub fn run_vector(vector: &RewardVector) -> Result<(u128, u128)> {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    let calc = &mut fixture.calculator;

    calc.set_base_reward_rate(&admin, vector.base_reward_rate)?;
    calc.set_bike_bonus(&admin, vector.bike_bonus)?;
    if let Some(multiplier) = vector.multiplier {
        calc.set_multiplier(&admin, vector.vehicle_tag, multiplier)?;
    }
    if let Some(factor) = vector.emission_factor {
        calc.set_emission_factor(&admin, vector.vehicle_tag, factor)?;
    }

    fixture.verify_ride(1, vector.vehicle_tag, vector.distance);
    let reward = fixture.reward_ride(1, vector.vehicle_tag, vector.distance)?;
    let emission = fixture.calculator.get_total_emissions_saved(1.into())?;
    Ok((reward, emission))
}
