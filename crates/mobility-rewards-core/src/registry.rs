//! Per-vehicle-type multiplier and emission factor tables.
//!
//! Lookups return `Option` so callers see whether an entry was configured;
//! the `*_or_default` variants apply [`DEFAULT_MULTIPLIER`] and
//! [`DEFAULT_EMISSION_FACTOR`].

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{Result, RewardError};
use crate::params::{DEFAULT_EMISSION_FACTOR, DEFAULT_MULTIPLIER, MAX_MULTIPLIER};
use crate::types::{Principal, VehicleType};

/// Admin-writable vehicle parameter tables.
#[derive(Debug, Clone)]
pub struct VehicleTypeRegistry {
    admin: Principal,
    multipliers: BTreeMap<VehicleType, u32>,
    emission_factors: BTreeMap<VehicleType, u64>,
}

impl VehicleTypeRegistry {
    /// Create an empty registry writable only by `admin`.
    pub fn new(admin: Principal) -> Self {
        Self {
            admin,
            multipliers: BTreeMap::new(),
            emission_factors: BTreeMap::new(),
        }
    }

    /// Rebuild a registry from exported tables, re-checking every bound.
    pub fn from_parts(
        admin: Principal,
        multipliers: BTreeMap<VehicleType, u32>,
        emission_factors: BTreeMap<VehicleType, u64>,
    ) -> Result<Self> {
        for &value in multipliers.values() {
            check_multiplier(value)?;
        }
        for &value in emission_factors.values() {
            check_emission_factor(value)?;
        }
        Ok(Self {
            admin,
            multipliers,
            emission_factors,
        })
    }

    /// Set the multiplier for the vehicle type named by `tag`.
    ///
    /// Checks run in order: caller, tag, value.
    pub fn set_multiplier(&mut self, caller: &Principal, tag: &str, value: u32) -> Result<()> {
        self.ensure_admin(caller)?;
        let vehicle_type = VehicleType::from_tag(tag)?;
        check_multiplier(value)?;

        info!(%vehicle_type, value, "multiplier set");
        self.multipliers.insert(vehicle_type, value);
        Ok(())
    }

    /// Set the CO2-per-distance-unit factor for the vehicle type named by `tag`.
    pub fn set_emission_factor(&mut self, caller: &Principal, tag: &str, value: u64) -> Result<()> {
        self.ensure_admin(caller)?;
        let vehicle_type = VehicleType::from_tag(tag)?;
        check_emission_factor(value)?;

        info!(%vehicle_type, value, "emission factor set");
        self.emission_factors.insert(vehicle_type, value);
        Ok(())
    }

    /// Configured multiplier, if any.
    pub fn multiplier(&self, vehicle_type: VehicleType) -> Option<u32> {
        self.multipliers.get(&vehicle_type).copied()
    }

    /// Configured multiplier, or [`DEFAULT_MULTIPLIER`].
    pub fn multiplier_or_default(&self, vehicle_type: VehicleType) -> u32 {
        self.multiplier(vehicle_type).unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Configured emission factor, if any.
    pub fn emission_factor(&self, vehicle_type: VehicleType) -> Option<u64> {
        self.emission_factors.get(&vehicle_type).copied()
    }

    /// Configured emission factor, or [`DEFAULT_EMISSION_FACTOR`].
    pub fn emission_factor_or_default(&self, vehicle_type: VehicleType) -> u64 {
        self.emission_factor(vehicle_type)
            .unwrap_or(DEFAULT_EMISSION_FACTOR)
    }

    /// Configured multipliers, in vehicle-type order.
    pub fn multipliers(&self) -> &BTreeMap<VehicleType, u32> {
        &self.multipliers
    }

    /// Configured emission factors, in vehicle-type order.
    pub fn emission_factors(&self) -> &BTreeMap<VehicleType, u64> {
        &self.emission_factors
    }

    fn ensure_admin(&self, caller: &Principal) -> Result<()> {
        if caller != &self.admin {
            debug!(%caller, "rejected non-admin registry change");
            return Err(RewardError::NotAuthorized);
        }
        Ok(())
    }
}

fn check_multiplier(value: u32) -> Result<()> {
    if value == 0 || value > MAX_MULTIPLIER {
        return Err(RewardError::InvalidMultiplier(value));
    }
    Ok(())
}

fn check_emission_factor(value: u64) -> Result<()> {
    if value == 0 {
        return Err(RewardError::InvalidEmissionFactor(value));
    }
    Ok(())
}
