use anchor_lang::prelude::*;

/// Emitted for every accepted purchase, after the listing state is final.
#[event]
pub struct TokensPurchased {
    pub token_mint: Pubkey,
    pub buyer: Pubkey,
    pub units: u64,
    /// Snapshot price the whole quantity was charged at.
    pub unit_price: u64,
    pub total_cost: u64,
    pub operator_fee: u64,
    pub referral_reward: u64,
    pub creator_proceeds: u64,
    pub units_sold: u64,
    pub amount_raised: u64,
    pub sale_open: bool,
    pub timestamp: i64,
}
