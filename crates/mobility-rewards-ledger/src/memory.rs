//! In-memory implementation of the RideLedger trait.

use std::collections::BTreeMap;

use mobility_rewards_core::{RideId, RideReward};
use tracing::trace;

use crate::traits::{PutResult, RideLedger};

/// In-memory ledger backed by a `BTreeMap`, so iteration is in ride-ID order.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    rides: BTreeMap<RideId, RideReward>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<(RideId, RideReward)> for MemoryLedger {
    fn from_iter<I: IntoIterator<Item = (RideId, RideReward)>>(iter: I) -> Self {
        Self {
            rides: iter.into_iter().collect(),
        }
    }
}

impl RideLedger for MemoryLedger {
    fn contains(&self, ride_id: RideId) -> bool {
        self.rides.contains_key(&ride_id)
    }

    fn get(&self, ride_id: RideId) -> Option<RideReward> {
        trace!(%ride_id, "ledger get");
        self.rides.get(&ride_id).cloned()
    }

    fn put(&mut self, ride_id: RideId, entry: RideReward) -> PutResult {
        match self.rides.insert(ride_id, entry) {
            Some(_) => PutResult::Replaced,
            None => PutResult::Inserted,
        }
    }

    fn len(&self) -> usize {
        self.rides.len()
    }

    fn entries(&self) -> Vec<(RideId, RideReward)> {
        self.rides
            .iter()
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }
}
