//! Host-supplied call context.

use mobility_rewards_core::Principal;

/// Who is calling, and the host's logical clock at the time of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// Authenticated caller (the transaction sender).
    pub caller: Principal,
    /// Host's monotonic logical clock.
    pub block_height: u64,
}

impl CallContext {
    /// Context for `caller` at `block_height`.
    pub fn new(caller: impl Into<Principal>, block_height: u64) -> Self {
        Self {
            caller: caller.into(),
            block_height,
        }
    }
}
