//! End-to-end behavior of the reward calculator.

use mobility_rewards::{
    CallContext, ContractRef, MintInstruction, Principal, RewardError, RideId, RideLedger,
    RideRequest, RideReward, VehicleType,
};
use mobility_rewards_testkit::{TestFixture, ADMIN, RIDER, VERIFIER};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn contract(address: &str) -> ContractRef {
    ContractRef::new(address).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sets_token_contract() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_token_contract(&admin, contract("ST2TEST"))
        .unwrap();
    assert_eq!(
        fixture.calculator.config().token_contract(),
        Some(&contract("ST2TEST"))
    );
}

#[test]
fn test_rejects_token_contract_change_by_non_admin() {
    let mut fixture = TestFixture::new();
    let fake = fixture.caller("ST3FAKE");
    assert_eq!(
        fixture
            .calculator
            .set_token_contract(&fake, contract("ST2TEST")),
        Err(RewardError::NotAuthorized)
    );
    assert!(fixture.calculator.config().token_contract().is_none());
}

#[test]
fn test_sets_verification_contract() {
    let mut fixture = TestFixture::unconfigured();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_verification_contract(&admin, contract("ST2TEST"))
        .unwrap();
    assert_eq!(
        fixture.calculator.config().verification_contract(),
        Some(&contract("ST2TEST"))
    );
}

#[test]
fn test_unset_sentinel_is_not_a_contract() {
    assert!(matches!(
        ContractRef::new(mobility_rewards::core::NULL_CONTRACT_ADDRESS),
        Err(RewardError::InvalidContractRef(_))
    ));
}

#[test]
fn test_sets_base_reward_rate_and_bike_bonus() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture.calculator.set_base_reward_rate(&admin, 20).unwrap();
    fixture.calculator.set_bike_bonus(&admin, 10).unwrap();

    let params = fixture.calculator.config().params();
    assert_eq!(params.base_reward_rate, 20);
    assert_eq!(params.bike_bonus, 10);
}

#[test]
fn test_rejects_non_positive_rates() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    assert_eq!(
        fixture.calculator.set_base_reward_rate(&admin, 0),
        Err(RewardError::InvalidRewardRate(0))
    );
    assert_eq!(
        fixture.calculator.set_bike_bonus(&admin, 0),
        Err(RewardError::InvalidRewardRate(0))
    );
}

#[test]
fn test_sets_and_bounds_multiplier() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_multiplier(&admin, "electric", 150)
        .unwrap();
    assert_eq!(
        fixture.calculator.registry().multiplier(VehicleType::Electric),
        Some(150)
    );
    assert_eq!(
        fixture.calculator.set_multiplier(&admin, "electric", 1001),
        Err(RewardError::InvalidMultiplier(1001))
    );
    assert_eq!(fixture.calculator.multiplier("electric").unwrap(), 150);
}

#[test]
fn test_sets_and_bounds_emission_factor() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_emission_factor(&admin, "electric", 100)
        .unwrap();
    assert_eq!(fixture.calculator.emission_factor("electric").unwrap(), 100);
    assert_eq!(
        fixture.calculator.set_emission_factor(&admin, "electric", 0),
        Err(RewardError::InvalidEmissionFactor(0))
    );
    assert_eq!(
        fixture.calculator.emission_factor("car"),
        Err(RewardError::InvalidVehicleType("car".into()))
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Reward Calculation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_rejects_unverified_ride() {
    let mut fixture = TestFixture::new();
    assert_eq!(
        fixture.reward_ride(1, "electric", 10),
        Err(RewardError::RideNotVerified(1))
    );
    assert!(fixture.calculator.mints().is_empty());
}

#[test]
fn test_rejects_invalid_vehicle_type() {
    let mut fixture = TestFixture::new();
    fixture.seed_placeholder(1);
    assert_eq!(
        fixture.reward_ride(1, "invalid", 10),
        Err(RewardError::InvalidVehicleType("invalid".into()))
    );
}

#[test]
fn test_rejects_invalid_distance() {
    let mut fixture = TestFixture::new();
    fixture.seed_placeholder(1);
    assert_eq!(
        fixture.reward_ride(1, "electric", 1001),
        Err(RewardError::InvalidDistance {
            distance: 1001,
            min: 1,
            max: 1000
        })
    );
    assert!(matches!(
        fixture.reward_ride(1, "electric", 0),
        Err(RewardError::InvalidDistance { .. })
    ));
}

#[test]
fn test_authority_check_precedes_everything() {
    let mut fixture = TestFixture::unconfigured();
    fixture.seed_placeholder(1);
    assert_eq!(
        fixture.reward_ride(1, "invalid", 5000),
        Err(RewardError::AuthorityNotSet)
    );
    assert_eq!(
        fixture.reward_ride(2, "electric", 10),
        Err(RewardError::AuthorityNotSet)
    );
}

#[test]
fn test_rejects_timestamp_behind_block_height() {
    let mut fixture = TestFixture::new();
    fixture.seed_placeholder(1);

    let stale = RideRequest::new(1, Principal::new(RIDER), 10, "electric", 99);
    let ctx = CallContext::new(RIDER, 100);
    assert_eq!(
        fixture.calculator.calculate_reward(&ctx, &stale),
        Err(RewardError::InvalidTimestamp {
            timestamp: 99,
            block_height: 100
        })
    );

    let current = RideRequest::new(1, Principal::new(RIDER), 10, "electric", 100);
    assert!(fixture.calculator.calculate_reward(&ctx, &current).is_ok());
}

#[test]
fn test_timestamp_checked_before_verification() {
    let mut fixture = TestFixture::new();
    let stale = RideRequest::new(7, Principal::new(RIDER), 10, "bike", 1);
    let ctx = CallContext::new(RIDER, 50);
    assert!(matches!(
        fixture.calculator.calculate_reward(&ctx, &stale),
        Err(RewardError::InvalidTimestamp { .. })
    ));
}

#[test]
fn test_distance_checked_before_timestamp() {
    let mut fixture = TestFixture::new();
    fixture.seed_placeholder(1);
    let stale = RideRequest::new(1, Principal::new(RIDER), 5000, "electric", 3);
    let ctx = CallContext::new(RIDER, 50);
    assert!(matches!(
        fixture.calculator.calculate_reward(&ctx, &stale),
        Err(RewardError::InvalidDistance { distance: 5000, .. })
    ));
}

#[test]
fn test_vehicle_type_checked_before_timestamp() {
    let mut fixture = TestFixture::new();
    fixture.seed_placeholder(1);
    let stale = RideRequest::new(1, Principal::new(RIDER), 10, "car", 3);
    let ctx = CallContext::new(RIDER, 50);
    assert_eq!(
        fixture.calculator.calculate_reward(&ctx, &stale),
        Err(RewardError::InvalidVehicleType("car".into()))
    );
}

#[test]
fn test_computes_reward_and_emission() {
    init_tracing();
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_emission_factor(&admin, "electric", 100)
        .unwrap();
    fixture.verify_ride(1, "electric", 10);

    assert_eq!(fixture.reward_ride(1, "electric", 10).unwrap(), 10_000);
    assert_eq!(
        fixture
            .calculator
            .get_total_emissions_saved(RideId(1))
            .unwrap(),
        1_000
    );
}

#[test]
fn test_custom_multiplier_scales_reward() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_multiplier(&admin, "electric", 150)
        .unwrap();
    fixture.verify_ride(1, "electric", 10);
    assert_eq!(fixture.reward_ride(1, "electric", 10).unwrap(), 15_000);
}

#[test]
fn test_bike_bonus_applies_once() {
    let mut fixture = TestFixture::new();
    for (ride, distance) in [(1, 1), (2, 10), (3, 999)] {
        fixture.verify_ride(ride, "bike", distance);
        assert_eq!(
            fixture.reward_ride(ride, "bike", distance).unwrap(),
            distance as u128 * 10 * 100 + 5
        );
    }
}

#[test]
fn test_reward_overwrites_placeholder() {
    let mut fixture = TestFixture::new();
    fixture.verify_ride(1, "public", 12);
    let reward = fixture.reward_ride(1, "public", 12).unwrap();

    let entry = fixture.calculator.ride_reward(RideId(1)).unwrap();
    assert_eq!(
        entry,
        RideReward {
            user: Principal::new(RIDER),
            distance: 12,
            vehicle_type: VehicleType::Public,
            reward_amount: reward,
            timestamp: 0,
            emission_saved: 0,
        }
    );
    assert_eq!(fixture.calculator.ledger().len(), 1);
}

#[test]
fn test_emits_exactly_one_mint_per_reward() {
    let mut fixture = TestFixture::new();
    fixture.verify_ride(1, "electric", 10);
    fixture.verify_ride(2, "bike", 4);

    let first = fixture.reward_ride(1, "electric", 10).unwrap();
    assert_eq!(fixture.calculator.mints().len(), 1);
    let second = fixture.reward_ride(2, "bike", 4).unwrap();

    let minted = fixture.calculator.mints_mut().drain();
    assert_eq!(
        minted,
        vec![
            MintInstruction {
                amount: first,
                recipient: Principal::new(RIDER),
            },
            MintInstruction {
                amount: second,
                recipient: Principal::new(RIDER),
            },
        ]
    );
}

#[test]
fn test_failed_reward_leaves_state_untouched() {
    let mut fixture = TestFixture::new();
    fixture.verify_ride(1, "electric", 10);
    let before = fixture.calculator.state_root().unwrap();

    assert!(fixture.reward_ride(1, "car", 10).is_err());
    assert!(fixture.reward_ride(1, "electric", 5000).is_err());

    assert_eq!(fixture.calculator.state_root().unwrap(), before);
    assert!(fixture.calculator.mints().is_empty());
}

#[test]
fn test_reward_recipient_is_request_user() {
    let mut fixture = TestFixture::new();
    fixture.verify_ride(1, "electric", 10);

    let other = RideRequest::new(1, Principal::new("ST9OTHER"), 10, "electric", 0);
    let ctx = fixture.caller(ADMIN);
    fixture.calculator.calculate_reward(&ctx, &other).unwrap();

    let minted = fixture.calculator.mints_mut().drain();
    assert_eq!(minted[0].recipient, Principal::new("ST9OTHER"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Reads
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_gets_total_emissions_saved_for_seeded_entry() {
    let mut fixture = TestFixture::new();
    fixture.calculator.ledger_mut().put(
        RideId(1),
        RideReward {
            user: Principal::new(ADMIN),
            distance: 10,
            vehicle_type: VehicleType::Electric,
            reward_amount: 1500,
            timestamp: 100,
            emission_saved: 1000,
        },
    );
    assert_eq!(
        fixture
            .calculator
            .get_total_emissions_saved(RideId(1))
            .unwrap(),
        1000
    );
}

#[test]
fn test_missing_ride_is_invalid_ride_id() {
    let fixture = TestFixture::new();
    assert_eq!(
        fixture.calculator.get_total_emissions_saved(RideId(42)),
        Err(RewardError::InvalidRideId(42))
    );
    assert_eq!(
        fixture.calculator.ride_reward(RideId(42)),
        Err(RewardError::InvalidRideId(42))
    );
}

#[test]
fn test_emission_reads_are_stable() {
    let mut fixture = TestFixture::new();
    let admin = fixture.admin();
    fixture
        .calculator
        .set_emission_factor(&admin, "public", 30)
        .unwrap();
    fixture.verify_ride(1, "public", 20);
    fixture.reward_ride(1, "public", 20).unwrap();

    let a = fixture.calculator.get_total_emissions_saved(RideId(1));
    let b = fixture.calculator.get_total_emissions_saved(RideId(1));
    assert_eq!(a, Ok(600));
    assert_eq!(a, b);
}

// ─────────────────────────────────────────────────────────────────────────────
// Verification Channel
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_only_verifier_marks_rides() {
    let mut fixture = TestFixture::new();
    let request = fixture.request(1, "electric", 10);

    let admin = fixture.admin();
    assert_eq!(
        fixture.calculator.mark_verified(&admin, &request),
        Err(RewardError::NotAuthorized)
    );

    let verifier = CallContext::new(VERIFIER, 0);
    fixture.calculator.mark_verified(&verifier, &request).unwrap();
    assert!(fixture.calculator.ledger().contains(RideId(1)));
}

#[test]
fn test_rewarded_ride_cannot_be_remarked() {
    let mut fixture = TestFixture::new();
    fixture.verify_ride(1, "electric", 10);
    fixture.reward_ride(1, "electric", 10).unwrap();

    let request = fixture.request(1, "electric", 10);
    let verifier = fixture.verifier();
    assert_eq!(
        fixture.calculator.mark_verified(&verifier, &request),
        Err(RewardError::RideAlreadyRecorded(1))
    );
    assert_eq!(
        fixture.calculator.ride_reward(RideId(1)).unwrap().reward_amount,
        10_000
    );
}
