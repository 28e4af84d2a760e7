//! The RewardCalculator: single owner of all reward state.
//!
//! The calculator brings together configuration, vehicle tables, the ride
//! ledger, and the mint sink. Hosts construct one instance and serialize
//! calls into it; nothing here is global.

use mobility_rewards_core::{
    quote, validate_ride, Blake3Hash, ConfigStore, ContractRef, Principal, Result, RewardError,
    RewardParams, RideId, RideRequest, RideReward, StateSnapshot, VehicleType,
    VehicleTypeRegistry,
};
use mobility_rewards_ledger::{LedgerExt, MemoryLedger, PutResult, RideLedger};
use tracing::{debug, info, trace};

use crate::context::CallContext;
use crate::mint::{MintInstruction, MintOutbox, MintSink};

/// Computes, records, and mints rewards for verified rides.
pub struct RewardCalculator<L: RideLedger = MemoryLedger, M: MintSink = MintOutbox> {
    config: ConfigStore,
    registry: VehicleTypeRegistry,
    ledger: L,
    mints: M,
}

impl RewardCalculator<MemoryLedger, MintOutbox> {
    /// In-memory calculator with default parameters.
    pub fn with_defaults(admin: Principal) -> Self {
        Self {
            registry: VehicleTypeRegistry::new(admin.clone()),
            config: ConfigStore::with_defaults(admin),
            ledger: MemoryLedger::new(),
            mints: MintOutbox::new(),
        }
    }
}

impl<L: RideLedger, M: MintSink> RewardCalculator<L, M> {
    /// Create a calculator. Fails if `params` do not validate.
    pub fn new(admin: Principal, params: RewardParams, ledger: L, mints: M) -> Result<Self> {
        Ok(Self {
            registry: VehicleTypeRegistry::new(admin.clone()),
            config: ConfigStore::new(admin, params)?,
            ledger,
            mints,
        })
    }

    /// Restore from a snapshot, loading its rides into `ledger`.
    pub fn from_snapshot(snapshot: StateSnapshot, mut ledger: L, mints: M) -> Result<Self> {
        let (config, registry, rides) = snapshot.restore()?;
        for (ride_id, entry) in rides {
            ledger.put(ride_id, entry);
        }
        info!(rides = ledger.len(), "restored reward state from snapshot");
        Ok(Self {
            config,
            registry,
            ledger,
            mints,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Point the calculator at the token contract. Admin only.
    pub fn set_token_contract(&mut self, ctx: &CallContext, contract: ContractRef) -> Result<()> {
        self.config
            .set_token_contract(&ctx.caller, contract)
            .map_err(rejected("set_token_contract"))
    }

    /// Set the verification authority. Admin only.
    pub fn set_verification_contract(
        &mut self,
        ctx: &CallContext,
        contract: ContractRef,
    ) -> Result<()> {
        self.config
            .set_verification_contract(&ctx.caller, contract)
            .map_err(rejected("set_verification_contract"))
    }

    /// Set reward units per distance unit. Admin only; must be positive.
    pub fn set_base_reward_rate(&mut self, ctx: &CallContext, rate: u64) -> Result<()> {
        self.config
            .set_base_reward_rate(&ctx.caller, rate)
            .map_err(rejected("set_base_reward_rate"))
    }

    /// Set the flat bonus added to bike rewards. Admin only; must be positive.
    pub fn set_bike_bonus(&mut self, ctx: &CallContext, bonus: u64) -> Result<()> {
        self.config
            .set_bike_bonus(&ctx.caller, bonus)
            .map_err(rejected("set_bike_bonus"))
    }

    /// Set the inclusive accepted distance range. Admin only.
    pub fn set_distance_bounds(&mut self, ctx: &CallContext, min: u64, max: u64) -> Result<()> {
        self.config
            .set_distance_bounds(&ctx.caller, min, max)
            .map_err(rejected("set_distance_bounds"))
    }

    /// Set the multiplier for a vehicle tag. Admin only; `(0, 1000]`.
    pub fn set_multiplier(&mut self, ctx: &CallContext, tag: &str, value: u32) -> Result<()> {
        self.registry
            .set_multiplier(&ctx.caller, tag, value)
            .map_err(rejected("set_multiplier"))
    }

    /// Set the emission factor for a vehicle tag. Admin only; must be positive.
    pub fn set_emission_factor(&mut self, ctx: &CallContext, tag: &str, value: u64) -> Result<()> {
        self.registry
            .set_emission_factor(&ctx.caller, tag, value)
            .map_err(rejected("set_emission_factor"))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification Channel
    // ─────────────────────────────────────────────────────────────────────────

    /// Record that the verification authority attests to `request`.
    ///
    /// Only the configured verification contract may call this. Writes a
    /// placeholder entry that `calculate_reward` later overwrites. A ride can
    /// be marked once.
    pub fn mark_verified(&mut self, ctx: &CallContext, request: &RideRequest) -> Result<()> {
        self.check_verifier(ctx, request)
            .map_err(rejected("mark_verified"))?;

        let vehicle_type = VehicleType::from_tag(&request.vehicle_type)
            .map_err(rejected("mark_verified"))?;
        let entry = RideReward::placeholder(
            request.user.clone(),
            request.distance,
            vehicle_type,
            request.timestamp,
        );
        let put = self.ledger.put(request.ride_id, entry);
        debug_assert_eq!(put, PutResult::Inserted);

        info!(ride_id = %request.ride_id, user = %request.user, "ride marked verified");
        Ok(())
    }

    fn check_verifier(&self, ctx: &CallContext, request: &RideRequest) -> Result<()> {
        let verifier = self
            .config
            .verification_contract()
            .ok_or(RewardError::AuthorityNotSet)?;
        if !verifier.is(&ctx.caller) {
            return Err(RewardError::NotAuthorized);
        }
        if self.ledger.contains(request.ride_id) {
            return Err(RewardError::RideAlreadyRecorded(request.ride_id.get()));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reward Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate a verified ride, compute its reward, record it, and emit
    /// one mint instruction. Returns the reward amount.
    ///
    /// Either everything happens or nothing does: all checks and arithmetic
    /// run before the ledger write.
    pub fn calculate_reward(&mut self, ctx: &CallContext, request: &RideRequest) -> Result<u128> {
        let ledger = &self.ledger;
        let vehicle_type = validate_ride(&self.config, request, ctx.block_height, |id| {
            ledger.contains(id)
        })
        .map_err(rejected("calculate_reward"))?;

        let figures = quote(
            self.config.params(),
            request.distance,
            vehicle_type,
            self.registry.multiplier_or_default(vehicle_type),
            self.registry.emission_factor_or_default(vehicle_type),
        )
        .map_err(rejected("calculate_reward"))?;

        let entry = RideReward {
            user: request.user.clone(),
            distance: request.distance,
            vehicle_type,
            reward_amount: figures.reward_amount,
            timestamp: request.timestamp,
            emission_saved: figures.emission_saved,
        };
        // The verification marker is always overwritten here.
        let put = self.ledger.put(request.ride_id, entry);
        debug_assert_eq!(put, PutResult::Replaced);

        self.mints.mint(MintInstruction {
            amount: figures.reward_amount,
            recipient: request.user.clone(),
        });

        info!(
            ride_id = %request.ride_id,
            user = %request.user,
            %vehicle_type,
            distance = request.distance,
            reward = %figures.reward_amount,
            emission_saved = %figures.emission_saved,
            "ride rewarded"
        );
        Ok(figures.reward_amount)
    }

    /// Emission saved by `ride_id`, or `InvalidRideId` if it has no entry.
    pub fn get_total_emissions_saved(&self, ride_id: RideId) -> Result<u128> {
        trace!(%ride_id, "get_total_emissions_saved");
        self.ledger
            .require(ride_id)
            .map(|entry| entry.emission_saved)
            .map_err(rejected("get_total_emissions_saved"))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The admin principal.
    pub fn admin(&self) -> &Principal {
        self.config.admin()
    }

    /// Scalar configuration and collaborator references.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Per-vehicle multipliers and emission factors.
    pub fn registry(&self) -> &VehicleTypeRegistry {
        &self.registry
    }

    /// Effective multiplier for `tag`, with the default applied.
    pub fn multiplier(&self, tag: &str) -> Result<u32> {
        let vehicle_type = VehicleType::from_tag(tag).map_err(rejected("multiplier"))?;
        Ok(self.registry.multiplier_or_default(vehicle_type))
    }

    /// Effective emission factor for `tag`, with the default applied.
    pub fn emission_factor(&self, tag: &str) -> Result<u64> {
        let vehicle_type = VehicleType::from_tag(tag).map_err(rejected("emission_factor"))?;
        Ok(self.registry.emission_factor_or_default(vehicle_type))
    }

    /// The ledger entry for `ride_id`.
    pub fn ride_reward(&self, ride_id: RideId) -> Result<RideReward> {
        self.ledger.require(ride_id).map_err(rejected("ride_reward"))
    }

    /// The ride ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Direct ledger access for hosts whose verification channel writes
    /// entries without going through [`RewardCalculator::mark_verified`].
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// The mint sink.
    pub fn mints(&self) -> &M {
        &self.mints
    }

    /// Mutable mint sink, for hosts that drain instructions.
    pub fn mints_mut(&mut self) -> &mut M {
        &mut self.mints
    }

    /// Capture the complete state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.config, &self.registry, self.ledger.entries())
    }

    /// BLAKE3 commitment to the complete state.
    pub fn state_root(&self) -> Result<Blake3Hash> {
        self.snapshot().state_root()
    }
}

/// Log a rejected operation and pass the error through.
fn rejected(op: &'static str) -> impl Fn(RewardError) -> RewardError {
    move |err| {
        debug!(op, code = err.code(), error = %err, "operation rejected");
        err
    }
}
