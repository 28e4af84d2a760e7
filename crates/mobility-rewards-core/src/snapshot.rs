//! Deterministic state snapshots and state-root commitments.
//!
//! A snapshot captures configuration, vehicle tables, and every ledger entry.
//! Maps are `BTreeMap` and rides are sorted by ID, so the same state always
//! encodes to the same CBOR bytes and the same [`Blake3Hash`] root.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ConfigStore;
use crate::digest::Blake3Hash;
use crate::error::{Result, RewardError};
use crate::params::RewardParams;
use crate::registry::VehicleTypeRegistry;
use crate::types::{ContractRef, Principal, RideId, RideReward, VehicleType};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Serializable image of the complete reward state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: u8,
    pub admin: Principal,
    pub token_contract: Option<ContractRef>,
    pub verification_contract: Option<ContractRef>,
    pub params: RewardParams,
    pub multipliers: BTreeMap<VehicleType, u32>,
    pub emission_factors: BTreeMap<VehicleType, u64>,
    /// Ledger entries, sorted by ride ID.
    pub rides: Vec<(RideId, RideReward)>,
}

impl StateSnapshot {
    /// Capture the given state. `rides` may arrive in any order.
    pub fn capture(
        config: &ConfigStore,
        registry: &VehicleTypeRegistry,
        mut rides: Vec<(RideId, RideReward)>,
    ) -> Self {
        rides.sort_by_key(|(id, _)| *id);
        Self {
            version: SNAPSHOT_VERSION,
            admin: config.admin().clone(),
            token_contract: config.token_contract().cloned(),
            verification_contract: config.verification_contract().cloned(),
            params: config.params().clone(),
            multipliers: registry.multipliers().clone(),
            emission_factors: registry.emission_factors().clone(),
            rides,
        }
    }

    /// Encode to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|e| RewardError::Snapshot(e.to_string()))?;
        Ok(buf)
    }

    /// Decode from CBOR bytes, rejecting unknown versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: Self =
            ciborium::from_reader(bytes).map_err(|e| RewardError::Snapshot(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RewardError::Snapshot(format!(
                "unsupported snapshot version: {}",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }

    /// Blake3 hash of the encoded snapshot.
    pub fn state_root(&self) -> Result<Blake3Hash> {
        Ok(Blake3Hash::hash(&self.to_bytes()?))
    }

    /// Split back into validated components.
    ///
    /// Parameters and vehicle tables are re-checked; ledger entries are
    /// returned as-is for the caller to load into its ledger.
    pub fn restore(self) -> Result<(ConfigStore, VehicleTypeRegistry, Vec<(RideId, RideReward)>)> {
        let config = ConfigStore::from_parts(
            self.admin.clone(),
            self.params,
            self.token_contract,
            self.verification_contract,
        )?;
        let registry =
            VehicleTypeRegistry::from_parts(self.admin, self.multipliers, self.emission_factors)?;
        Ok((config, registry, self.rides))
    }
}
