//! Ledger trait: the abstract interface for ride reward storage.

use mobility_rewards_core::{Result, RewardError, RideId, RideReward};

/// Result of writing an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutResult {
    /// No entry existed for this ride.
    Inserted,
    /// An existing entry was overwritten.
    Replaced,
}

/// Map from ride ID to reward entry. Entries are never removed.
///
/// Operations are synchronous; the host serializes calls.
pub trait RideLedger {
    /// Whether an entry exists. Used as the verification gate.
    fn contains(&self, ride_id: RideId) -> bool;

    /// Get the stored entry.
    fn get(&self, ride_id: RideId) -> Option<RideReward>;

    /// Insert or overwrite the entry for `ride_id`.
    fn put(&mut self, ride_id: RideId, entry: RideReward) -> PutResult;

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, ordered by ride ID.
    fn entries(&self) -> Vec<(RideId, RideReward)>;
}

/// Extension trait for common ledger lookups.
pub trait LedgerExt: RideLedger {
    /// Get the stored entry, or `InvalidRideId` if there is none.
    fn require(&self, ride_id: RideId) -> Result<RideReward> {
        self.get(ride_id)
            .ok_or(RewardError::InvalidRideId(ride_id.get()))
    }
}

impl<L: RideLedger + ?Sized> LedgerExt for L {}
