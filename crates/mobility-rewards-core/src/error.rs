//! Error types for mobility rewards.

use thiserror::Error;

/// Errors returned by configuration, registry, and reward operations.
///
/// Every variant is a caller mistake or an unmet precondition. None of them
/// are transient, so the core never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("caller is not authorized")]
    NotAuthorized,

    #[error("distance {distance} outside [{min}, {max}]")]
    InvalidDistance { distance: u64, min: u64, max: u64 },

    #[error("invalid vehicle type: {0:?}")]
    InvalidVehicleType(String),

    #[error("no reward recorded for ride {0}")]
    InvalidRideId(u64),

    #[error("ride {0} has not been verified")]
    RideNotVerified(u64),

    #[error("reward rate must be positive, got {0}")]
    InvalidRewardRate(u64),

    #[error("multiplier must be in (0, 1000], got {0}")]
    InvalidMultiplier(u32),

    #[error("emission factor must be positive, got {0}")]
    InvalidEmissionFactor(u64),

    #[error("verification authority is not set")]
    AuthorityNotSet,

    #[error("timestamp {timestamp} is behind block height {block_height}")]
    InvalidTimestamp { timestamp: u64, block_height: u64 },

    #[error("invalid contract reference: {0:?}")]
    InvalidContractRef(String),

    #[error("invalid distance bounds: min {min}, max {max}")]
    InvalidDistanceBounds { min: u64, max: u64 },

    #[error("arithmetic overflow computing {0}")]
    ArithmeticOverflow(&'static str),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("ride {0} is already recorded")]
    RideAlreadyRecorded(u64),
}

impl RewardError {
    /// Stable numeric code for hosts that surface errors as integers.
    pub const fn code(&self) -> u32 {
        match self {
            RewardError::NotAuthorized => 100,
            RewardError::InvalidDistance { .. } => 101,
            RewardError::InvalidVehicleType(_) => 102,
            RewardError::InvalidRideId(_) => 103,
            RewardError::RideNotVerified(_) => 104,
            RewardError::InvalidRewardRate(_) => 105,
            RewardError::InvalidEmissionFactor(_) => 107,
            RewardError::AuthorityNotSet => 109,
            RewardError::InvalidMultiplier(_) => 110,
            RewardError::InvalidTimestamp { .. } => 111,
            RewardError::InvalidContractRef(_) => 112,
            RewardError::InvalidDistanceBounds { .. } => 113,
            RewardError::ArithmeticOverflow(_) => 114,
            RewardError::Snapshot(_) => 115,
            RewardError::RideAlreadyRecorded(_) => 116,
        }
    }
}

/// Result type for reward operations.
pub type Result<T> = std::result::Result<T, RewardError>;
