//! Ride validation: the ordered checks a ride passes before it is rewarded.

use serde::{Deserialize, Serialize};

use crate::config::ConfigStore;
use crate::error::{Result, RewardError};
use crate::types::{Principal, RideId, VehicleType};

/// A request to reward one ride, as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRequest {
    pub ride_id: RideId,
    pub user: Principal,
    pub distance: u64,
    /// Vehicle tag as submitted; parsed during validation.
    pub vehicle_type: String,
    pub timestamp: u64,
}

impl RideRequest {
    pub fn new(
        ride_id: impl Into<RideId>,
        user: Principal,
        distance: u64,
        vehicle_type: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            ride_id: ride_id.into(),
            user,
            distance,
            vehicle_type: vehicle_type.into(),
            timestamp,
        }
    }
}

/// Validate a ride request. The first failing check wins.
///
/// This performs, in order:
/// 1. Verification authority configured
/// 2. Distance inside the configured bounds
/// 3. Vehicle tag in the closed set
/// 4. Timestamp not behind the host's block height
/// 5. Ride already marked verified in the ledger
///
/// `is_verified` is only consulted when checks 1-4 pass.
pub fn validate_ride(
    config: &ConfigStore,
    request: &RideRequest,
    block_height: u64,
    is_verified: impl FnOnce(RideId) -> bool,
) -> Result<VehicleType> {
    // 1. Authority
    if config.verification_contract().is_none() {
        return Err(RewardError::AuthorityNotSet);
    }

    // 2. Distance
    let params = config.params();
    if !params.accepts_distance(request.distance) {
        return Err(RewardError::InvalidDistance {
            distance: request.distance,
            min: params.min_distance,
            max: params.max_distance,
        });
    }

    // 3. Vehicle type
    let vehicle_type = VehicleType::from_tag(&request.vehicle_type)?;

    // 4. Timestamp
    if request.timestamp < block_height {
        return Err(RewardError::InvalidTimestamp {
            timestamp: request.timestamp,
            block_height,
        });
    }

    // 5. Verified
    if !is_verified(request.ride_id) {
        return Err(RewardError::RideNotVerified(request.ride_id.get()));
    }

    Ok(vehicle_type)
}
