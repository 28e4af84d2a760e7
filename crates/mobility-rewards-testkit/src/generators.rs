//! Proptest generators for property-based testing.

use proptest::prelude::*;

use mobility_rewards::{Principal, VehicleType};

/// Generate a vehicle type.
pub fn vehicle_type() -> impl Strategy<Value = VehicleType> {
    prop_oneof![
        Just(VehicleType::Electric),
        Just(VehicleType::Bike),
        Just(VehicleType::Public),
    ]
}

/// Generate a tag that is not a vehicle type.
pub fn invalid_tag() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,12}".prop_filter("must not be a vehicle tag", |tag| {
        VehicleType::from_tag(tag).is_err()
    })
}

/// Generate a principal that is not `excluded`.
pub fn principal_except(excluded: &'static str) -> impl Strategy<Value = Principal> {
    "ST[0-9A-Z]{1,20}"
        .prop_filter("must differ from excluded principal", move |p| p != excluded)
        .prop_map(Principal::new)
}

/// Generate a distance inside the default bounds `[1, 1000]`.
pub fn valid_distance() -> impl Strategy<Value = u64> {
    1u64..=1000
}

/// Generate a distance outside the default bounds `[1, 1000]`.
pub fn invalid_distance() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0u64), 1001u64..=u64::MAX]
}

/// Generate a valid multiplier.
pub fn multiplier() -> impl Strategy<Value = u32> {
    1u32..=1000
}

/// Parameters for one ride.
#[derive(Debug, Clone)]
pub struct RideParams {
    pub ride_id: u64,
    pub vehicle_type: VehicleType,
    pub distance: u64,
}

impl Arbitrary for RideParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<u64>(), vehicle_type(), valid_distance())
            .prop_map(|(ride_id, vehicle_type, distance)| RideParams {
                ride_id,
                vehicle_type,
                distance,
            })
            .boxed()
    }
}

/// Admin configuration for a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub base_reward_rate: u64,
    pub bike_bonus: u64,
    pub multiplier: Option<u32>,
    pub emission_factor: Option<u64>,
}

impl Arbitrary for ScenarioParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            1u64..=1_000_000,
            1u64..=1_000_000,
            proptest::option::of(multiplier()),
            proptest::option::of(1u64..=1_000_000),
        )
            .prop_map(
                |(base_reward_rate, bike_bonus, multiplier, emission_factor)| ScenarioParams {
                    base_reward_rate,
                    bike_bonus,
                    multiplier,
                    emission_factor,
                },
            )
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_invalid_tags_never_parse(tag in invalid_tag()) {
            prop_assert!(VehicleType::from_tag(&tag).is_err());
        }

        #[test]
        fn test_invalid_distances_out_of_bounds(distance in invalid_distance()) {
            prop_assert!(!(1..=1000).contains(&distance));
        }
    }
}
