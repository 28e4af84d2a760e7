//! # Mobility Rewards Ledger
//!
//! Storage abstraction for ride rewards. The [`RideLedger`] trait keeps the
//! calculator independent of where entries live; [`MemoryLedger`] is the
//! in-memory implementation hosts embed directly.
//!
//! ## Design Notes
//!
//! - **Presence is verification**: an entry existing for a ride ID is the
//!   signal that the ride was verified by the external authority.
//! - **Unconditional upsert**: `put` overwrites; the verification marker and
//!   the final computed entry share one slot.
//! - **No deletes**: entries are never removed.

pub mod memory;
pub mod traits;

pub use memory::MemoryLedger;
pub use traits::{LedgerExt, PutResult, RideLedger};
