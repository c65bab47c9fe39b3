use anchor_lang::prelude::*;

/// Emitted when the operator moves accrued fees to the treasury.
#[event]
pub struct FeesWithdrawn {
    pub operator: Pubkey,
    pub treasury: Pubkey,
    pub amount: u64,
    pub remaining_accrued: u64,
    pub timestamp: i64,
}
