//! # Mobility Rewards
//!
//! Reward issuance for verified trips in a mobility-incentive program.
//!
//! ## Overview
//!
//! Given a ride that an external verification authority has attested, the
//! [`RewardCalculator`] computes a token reward and an emissions-saved figure,
//! records both against the ride ID, and emits a [`MintInstruction`] for the
//! external token ledger.
//!
//! ## Key Concepts
//!
//! - **Admin**: the single principal allowed to change configuration
//! - **Verification marker**: a ledger entry written before any reward; its
//!   presence is what makes a ride rewardable
//! - **Reward**: `distance * base_reward_rate * multiplier + bike_bonus?`
//! - **Emission saved**: `distance * emission_factor`
//!
//! ## Usage
//!
//! ```rust
//! use mobility_rewards::{CallContext, ContractRef, Principal, RewardCalculator, RideRequest};
//!
//! let mut calc = RewardCalculator::with_defaults(Principal::new("ST1ADMIN"));
//! let admin = CallContext::new("ST1ADMIN", 0);
//! let verifier = CallContext::new("ST2VERIFY", 0);
//!
//! calc.set_verification_contract(&admin, ContractRef::new("ST2VERIFY").unwrap())
//!     .unwrap();
//!
//! let ride = RideRequest::new(1, Principal::new("ST3RIDER"), 10, "electric", 5);
//! calc.mark_verified(&verifier, &ride).unwrap();
//!
//! let reward = calc.calculate_reward(&admin, &ride).unwrap();
//! assert_eq!(reward, 10 * 10 * 100);
//! assert_eq!(calc.mints().len(), 1);
//! ```
//!
//! ## Re-exports
//!
//! - `mobility_rewards::core` - Types, configuration, registry, reward math
//! - `mobility_rewards::ledger` - Ledger trait and in-memory ledger

pub mod calculator;
pub mod context;
pub mod mint;

// Re-export component crates
pub use mobility_rewards_core as core;
pub use mobility_rewards_ledger as ledger;

pub use calculator::RewardCalculator;
pub use context::CallContext;
pub use mint::{MintInstruction, MintOutbox, MintSink};

// Re-export commonly used core types
pub use mobility_rewards_core::{
    Blake3Hash, ContractRef, Principal, Result, RewardError, RewardParams, RideId, RideRequest,
    RideReward, StateSnapshot, VehicleType,
};
pub use mobility_rewards_ledger::{MemoryLedger, RideLedger};
