//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use mobility_rewards::{
    CallContext, ContractRef, Principal, Result, RewardCalculator, RideRequest, RideReward,
    VehicleType,
};
use mobility_rewards_ledger::RideLedger;

/// Admin principal used by fixtures.
pub const ADMIN: &str = "ST1TEST";

/// Verification contract configured by fixtures.
pub const VERIFIER: &str = "ST2VERIFY";

/// Default rider.
pub const RIDER: &str = "ST4RIDER";

/// A calculator with the verification authority configured.
pub struct TestFixture {
    pub calculator: RewardCalculator,
    /// Block height used for every call.
    pub block_height: u64,
}

impl TestFixture {
    /// Default parameters, verification contract set to [`VERIFIER`].
    pub fn new() -> Self {
        let mut fixture = Self::unconfigured();
        fixture
            .calculator
            .set_verification_contract(&fixture.admin(), verifier_ref())
            .expect("admin can set verification contract");
        fixture
    }

    /// Default parameters, no collaborator references set.
    pub fn unconfigured() -> Self {
        Self {
            calculator: RewardCalculator::with_defaults(Principal::new(ADMIN)),
            block_height: 0,
        }
    }

    /// Context for the admin at the current block height.
    pub fn admin(&self) -> CallContext {
        CallContext::new(ADMIN, self.block_height)
    }

    /// Context for the verification contract.
    pub fn verifier(&self) -> CallContext {
        CallContext::new(VERIFIER, self.block_height)
    }

    /// Context for an arbitrary caller.
    pub fn caller(&self, who: &str) -> CallContext {
        CallContext::new(who, self.block_height)
    }

    /// A request for [`RIDER`] stamped with the current block height.
    pub fn request(&self, ride_id: u64, tag: &str, distance: u64) -> RideRequest {
        RideRequest::new(ride_id, Principal::new(RIDER), distance, tag, self.block_height)
    }

    /// Mark a ride verified through the verification channel.
    pub fn verify_ride(&mut self, ride_id: u64, tag: &str, distance: u64) {
        let request = self.request(ride_id, tag, distance);
        let verifier = self.verifier();
        self.calculator
            .mark_verified(&verifier, &request)
            .expect("verifier can mark ride");
    }

    /// Write a placeholder straight into the ledger, bypassing the channel.
    pub fn seed_placeholder(&mut self, ride_id: u64) {
        self.calculator.ledger_mut().put(
            ride_id.into(),
            RideReward::placeholder(Principal::new(RIDER), 0, VehicleType::Electric, 0),
        );
    }

    /// Reward a ride as [`RIDER`].
    pub fn reward_ride(&mut self, ride_id: u64, tag: &str, distance: u64) -> Result<u128> {
        let request = self.request(ride_id, tag, distance);
        let ctx = self.caller(RIDER);
        self.calculator.calculate_reward(&ctx, &request)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn verifier_ref() -> ContractRef {
    ContractRef::new(VERIFIER).expect("fixture address is valid")
}
