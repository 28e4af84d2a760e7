//! Admin-controlled configuration store.
//!
//! Holds the scalar [`RewardParams`] and the two collaborator references.
//! Every setter is gated on the admin identity fixed at construction, and
//! leaves the store untouched when it fails.

use tracing::{debug, info};

use crate::error::{Result, RewardError};
use crate::params::{validate_distance_bounds, RewardParams};
use crate::types::{ContractRef, Principal};

/// Admin-gated scalar configuration.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    admin: Principal,
    token_contract: Option<ContractRef>,
    verification_contract: Option<ContractRef>,
    params: RewardParams,
}

impl ConfigStore {
    /// Create a store with both collaborator references unset.
    pub fn new(admin: Principal, params: RewardParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            admin,
            token_contract: None,
            verification_contract: None,
            params,
        })
    }

    /// Create a store with [`RewardParams::default`].
    pub fn with_defaults(admin: Principal) -> Self {
        Self {
            admin,
            token_contract: None,
            verification_contract: None,
            params: RewardParams::default(),
        }
    }

    /// Rebuild a store from previously exported parts.
    pub fn from_parts(
        admin: Principal,
        params: RewardParams,
        token_contract: Option<ContractRef>,
        verification_contract: Option<ContractRef>,
    ) -> Result<Self> {
        let mut store = Self::new(admin, params)?;
        store.token_contract = token_contract;
        store.verification_contract = verification_contract;
        Ok(store)
    }

    /// The admin identity.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Fail with `NotAuthorized` unless `caller` is the admin.
    pub fn ensure_admin(&self, caller: &Principal) -> Result<()> {
        if caller != &self.admin {
            debug!(%caller, "rejected non-admin configuration change");
            return Err(RewardError::NotAuthorized);
        }
        Ok(())
    }

    /// Current scalar parameters.
    pub fn params(&self) -> &RewardParams {
        &self.params
    }

    /// The token contract, if configured.
    pub fn token_contract(&self) -> Option<&ContractRef> {
        self.token_contract.as_ref()
    }

    /// The verification authority, if configured.
    pub fn verification_contract(&self) -> Option<&ContractRef> {
        self.verification_contract.as_ref()
    }

    /// Set the token contract reference.
    pub fn set_token_contract(&mut self, caller: &Principal, contract: ContractRef) -> Result<()> {
        self.ensure_admin(caller)?;
        info!(%contract, "token contract set");
        self.token_contract = Some(contract);
        Ok(())
    }

    /// Set the verification authority reference.
    pub fn set_verification_contract(
        &mut self,
        caller: &Principal,
        contract: ContractRef,
    ) -> Result<()> {
        self.ensure_admin(caller)?;
        info!(%contract, "verification contract set");
        self.verification_contract = Some(contract);
        Ok(())
    }

    /// Set the base reward rate. Zero is rejected.
    pub fn set_base_reward_rate(&mut self, caller: &Principal, rate: u64) -> Result<()> {
        self.ensure_admin(caller)?;
        if rate == 0 {
            return Err(RewardError::InvalidRewardRate(rate));
        }
        info!(rate, "base reward rate set");
        self.params.base_reward_rate = rate;
        Ok(())
    }

    /// Bike bonus shares the reward-rate error kind.
    pub fn set_bike_bonus(&mut self, caller: &Principal, bonus: u64) -> Result<()> {
        self.ensure_admin(caller)?;
        if bonus == 0 {
            return Err(RewardError::InvalidRewardRate(bonus));
        }
        info!(bonus, "bike bonus set");
        self.params.bike_bonus = bonus;
        Ok(())
    }

    /// Set `[min, max]`; see [`validate_distance_bounds`].
    pub fn set_distance_bounds(&mut self, caller: &Principal, min: u64, max: u64) -> Result<()> {
        self.ensure_admin(caller)?;
        validate_distance_bounds(min, max)?;
        info!(min, max, "distance bounds set");
        self.params.min_distance = min;
        self.params.max_distance = max;
        Ok(())
    }
}
