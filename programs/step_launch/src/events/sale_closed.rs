use anchor_lang::prelude::*;

/// Emitted whenever a sale transitions to (or is re-confirmed) closed,
/// either by the creator or automatically when a purchase crosses a
/// closure threshold.
#[event]
pub struct SaleClosed {
    pub token_mint: Pubkey,
    pub closed_by: Pubkey,
    pub units_sold: u64,
    pub amount_raised: u64,
    pub timestamp: i64,
}
