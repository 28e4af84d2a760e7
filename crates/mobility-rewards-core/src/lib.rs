//! # Mobility Rewards Core
//!
//! Pure primitives for rewarding verified rides: strong types, admin-gated
//! configuration, vehicle parameter tables, validation, and reward math.
//!
//! This crate contains no I/O and no storage. Ledger access is abstracted in
//! `mobility-rewards-ledger`; the calculator that ties everything together
//! lives in `mobility-rewards`.
//!
//! ## Key Types
//!
//! - [`ConfigStore`] - Base rate, bike bonus, distance bounds, collaborator references
//! - [`VehicleTypeRegistry`] - Per-vehicle multipliers and emission factors
//! - [`RideReward`] - A ledger entry for one ride
//! - [`RewardError`] - Every failure kind, with stable numeric codes
//!
//! ## Snapshots
//!
//! State is committed to with a BLAKE3 root over deterministic CBOR. See
//! [`snapshot`] module.

pub mod config;
pub mod digest;
pub mod error;
pub mod params;
pub mod registry;
pub mod reward;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use config::ConfigStore;
pub use digest::Blake3Hash;
pub use error::{Result, RewardError};
pub use params::{RewardParams, DEFAULT_EMISSION_FACTOR, DEFAULT_MULTIPLIER, MAX_MULTIPLIER};
pub use registry::VehicleTypeRegistry;
pub use reward::{compute_emission_saved, compute_reward, quote, RewardQuote};
pub use snapshot::{StateSnapshot, SNAPSHOT_VERSION};
pub use types::{ContractRef, Principal, RideId, RideReward, VehicleType, NULL_CONTRACT_ADDRESS};
pub use validation::{validate_ride, RideRequest};
