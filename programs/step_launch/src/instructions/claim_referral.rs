use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::events::ReferralClaimed;
use crate::state::ReferralAccount;

/// A referrer drains their own accrued reward balance from the referral
/// vault. The PDA derivation from the signer's key is the authorization:
/// nobody can claim someone else's balance.
#[derive(Accounts)]
pub struct ClaimReferral<'info> {
    #[account(mut)]
    pub referrer: Signer<'info>,

    #[account(
        mut,
        seeds = [REFERRAL_SEED.as_bytes(), referrer.key().as_ref()],
        bump = referral_account.bump,
    )]
    pub referral_account: Account<'info, ReferralAccount>,

    #[account(
        mut,
        seeds = [REFERRAL_VAULT_SEED.as_bytes()],
        bump,
    )]
    pub referral_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimReferral<'info> {
    pub fn claim_referral(&mut self, bumps: ClaimReferralBumps) -> Result<u64> {
        let amount = self.referral_account.drain()?;

        let seeds = &[REFERRAL_VAULT_SEED.as_bytes(), &[bumps.referral_vault]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Transfer {
                from: self.referral_vault.to_account_info(),
                to: self.referrer.to_account_info(),
            },
            signer_seeds,
        );
        transfer(cpi_ctx, amount)?;

        emit!(ReferralClaimed {
            referrer: self.referrer.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(amount)
    }
}
