use anchor_lang::prelude::*;

/// Emitted when a referrer drains their accrued reward balance.
#[event]
pub struct ReferralClaimed {
    pub referrer: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
