use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{ReferralAccount, Registry};

/// Read-only registry queries, answered from the creation-order sequence
/// and returned as instruction return data.
#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(
        seeds = [REGISTRY_SEED.as_bytes()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

impl<'info> RegistryView<'info> {
    pub fn get_listing_by_index(&self, index: u64) -> Result<Pubkey> {
        Ok(self.registry.entry_at(index)?.mint)
    }

    pub fn get_creator_by_index(&self, index: u64) -> Result<Pubkey> {
        Ok(self.registry.entry_at(index)?.creator)
    }

    pub fn get_listing_count(&self) -> Result<u64> {
        Ok(self.registry.len())
    }
}

/// Read-only referral ledger query for one referrer's accrued balance.
#[derive(Accounts)]
pub struct ReferralView<'info> {
    /// Wallet whose balance is being queried.
    pub referrer: SystemAccount<'info>,

    #[account(
        seeds = [REFERRAL_SEED.as_bytes(), referrer.key().as_ref()],
        bump = referral_account.bump,
    )]
    pub referral_account: Account<'info, ReferralAccount>,
}

impl<'info> ReferralView<'info> {
    pub fn get_referral_balance(&self) -> Result<u64> {
        Ok(self.referral_account.accrued)
    }
}
