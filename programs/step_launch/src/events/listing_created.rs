use anchor_lang::prelude::*;

/// Emitted when a new listing is created and its supply is minted into the
/// sale vault.
#[event]
pub struct ListingCreated {
    pub token_mint: Pubkey,
    pub listing: Pubkey,
    pub creator: Pubkey,
    /// Stable position in the registry sequence.
    pub index: u64,
    pub listing_fee_paid: u64,
    pub timestamp: i64,
}
