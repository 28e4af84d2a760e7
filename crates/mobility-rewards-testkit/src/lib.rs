//! # Mobility Rewards Testkit
//!
//! Testing utilities for mobility rewards.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known rides with expected reward and emission figures
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A configured calculator plus helpers to seed verified rides
//!
//! ## Golden Vectors
//!
//! ```rust
//! use mobility_rewards_testkit::vectors::{all_vectors, run_vector};
//!
//! for vector in all_vectors() {
//!     let (reward, emission) = run_vector(&vector).unwrap();
//!     assert_eq!(reward, vector.expected_reward);
//!     assert_eq!(emission, vector.expected_emission_saved);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use mobility_rewards_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.verify_ride(1, "electric", 10);
//! let reward = fixture.reward_ride(1, "electric", 10).unwrap();
//! assert_eq!(reward, 10_000);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{TestFixture, ADMIN, RIDER, VERIFIER};
pub use generators::{RideParams, ScenarioParams};
pub use vectors::{all_vectors, run_vector, RewardVector};
