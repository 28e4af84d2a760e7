//! Strong type definitions for mobility rewards.
//!
//! Identifiers and tags are newtypes so a ride ID cannot be passed where a
//! distance is expected, and an unset contract reference cannot be spelled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RewardError;

/// Caller-supplied ride identifier.
///
/// Uniqueness is enforced by the ledger, not by this type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(pub u64);

impl RideId {
    /// Create a new RideId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RideId({})", self.0)
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RideId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An authenticated principal: the admin, a rider, or a collaborator contract.
///
/// Address formatting belongs to the host, so this is an opaque string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from its host representation.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The host representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ContractRef> for Principal {
    fn from(contract: ContractRef) -> Self {
        Self(contract.0)
    }
}

/// The host's burn address, historically used to mean "not configured".
///
/// A `ContractRef` can never hold it; "not configured" is `None`.
pub const NULL_CONTRACT_ADDRESS: &str = "SP000000000000000000002Q6VF78";

/// Reference to an external collaborator contract (token or verification).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractRef(String);

impl ContractRef {
    /// Parse a contract reference.
    ///
    /// Rejects the empty string and [`NULL_CONTRACT_ADDRESS`].
    pub fn new(address: impl Into<String>) -> Result<Self, RewardError> {
        let address = address.into();
        if address.is_empty() || address == NULL_CONTRACT_ADDRESS {
            return Err(RewardError::InvalidContractRef(address));
        }
        Ok(Self(address))
    }

    /// The host representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `principal` is this contract.
    pub fn is(&self, principal: &Principal) -> bool {
        self.0 == principal.as_str()
    }
}

impl fmt::Debug for ContractRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractRef({})", self.0)
    }
}

impl fmt::Display for ContractRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContractRef {
    type Error = RewardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ContractRef> for String {
    fn from(contract: ContractRef) -> Self {
        contract.0
    }
}

impl FromStr for ContractRef {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The closed set of vehicle types that earn rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Electric,
    Bike,
    Public,
}

impl VehicleType {
    /// All vehicle types, in tag order.
    pub const ALL: [VehicleType; 3] = [VehicleType::Electric, VehicleType::Bike, VehicleType::Public];

    /// The lowercase tag hosts pass in.
    pub const fn tag(&self) -> &'static str {
        match self {
            VehicleType::Electric => "electric",
            VehicleType::Bike => "bike",
            VehicleType::Public => "public",
        }
    }

    /// Parse a tag. Matching is exact; `"Bike"` is not a vehicle type.
    pub fn from_tag(tag: &str) -> Result<Self, RewardError> {
        match tag {
            "electric" => Ok(VehicleType::Electric),
            "bike" => Ok(VehicleType::Bike),
            "public" => Ok(VehicleType::Public),
            other => Err(RewardError::InvalidVehicleType(other.to_string())),
        }
    }

    /// Whether the flat bike bonus applies.
    pub const fn earns_bike_bonus(&self) -> bool {
        matches!(self, VehicleType::Bike)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VehicleType {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// A ledger entry for one ride.
///
/// Written first as a placeholder by the verification authority, then
/// overwritten in place with the computed figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideReward {
    /// Principal receiving the reward.
    pub user: Principal,
    /// Distance travelled, in distance units.
    pub distance: u64,
    pub vehicle_type: VehicleType,
    /// Token units minted for this ride.
    pub reward_amount: u128,
    /// Logical timestamp supplied by the caller.
    pub timestamp: u64,
    /// CO2 saved, in emission-factor units times distance.
    pub emission_saved: u128,
}

impl RideReward {
    /// A verification marker with no computed figures yet.
    pub fn placeholder(
        user: Principal,
        distance: u64,
        vehicle_type: VehicleType,
        timestamp: u64,
    ) -> Self {
        Self {
            user,
            distance,
            vehicle_type,
            reward_amount: 0,
            timestamp,
            emission_saved: 0,
        }
    }
}
