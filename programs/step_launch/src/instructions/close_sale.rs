use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StepLaunchError;
use crate::events::SaleClosed;
use crate::state::Listing;

#[derive(Accounts)]
pub struct CloseSale<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED.as_bytes(), listing.token_mint.as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,
}

impl<'info> CloseSale<'info> {
    /// Creator-only close. Deliberately idempotent: closing an
    /// already-closed sale succeeds and re-emits the closure event, it does
    /// not error.
    pub fn close_sale(&mut self) -> Result<()> {
        self.listing.ensure_creator(&self.caller.key())?;
        require!(!self.listing.settling, StepLaunchError::ReentrantCall);

        self.listing.mark_closed();
        msg!("Sale closed for mint {}", self.listing.token_mint);

        emit!(SaleClosed {
            token_mint: self.listing.token_mint,
            closed_by: self.caller.key(),
            units_sold: self.listing.units_sold,
            amount_raised: self.listing.amount_raised,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
