//! Mint instructions handed to the external token ledger.

use std::collections::VecDeque;

use mobility_rewards_core::Principal;
use serde::{Deserialize, Serialize};

/// Instruction to mint `amount` token units to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintInstruction {
    pub amount: u128,
    pub recipient: Principal,
}

/// Receiver for mint instructions.
///
/// Fire-and-forget: the calculator does not wait for confirmation and does
/// not roll back its ledger write if minting later fails.
pub trait MintSink {
    fn mint(&mut self, instruction: MintInstruction);
}

/// Queue of emitted instructions, drained by the host.
#[derive(Debug, Clone, Default)]
pub struct MintOutbox {
    pending: VecDeque<MintInstruction>,
}

impl MintOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending instruction.
    pub fn drain(&mut self) -> Vec<MintInstruction> {
        self.pending.drain(..).collect()
    }
}

impl MintSink for MintOutbox {
    fn mint(&mut self, instruction: MintInstruction) {
        self.pending.push_back(instruction);
    }
}

impl MintSink for Vec<MintInstruction> {
    fn mint(&mut self, instruction: MintInstruction) {
        self.push(instruction);
    }
}
