use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::error::StepLaunchError;
use crate::events::FeesWithdrawn;
use crate::state::Config;

/// Operator-only withdrawal of accrued marketplace fees (listing fees plus
/// the operator share of every purchase) from the fee vault to the
/// configured treasury wallet.
#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [FEE_VAULT_SEED.as_bytes()],
        bump,
    )]
    pub fee_vault: SystemAccount<'info>,

    #[account(
        mut,
        address = config.treasury,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawFees<'info> {
    pub fn withdraw_fees(&mut self, amount: u64, bumps: WithdrawFeesBumps) -> Result<()> {
        require!(
            self.operator.key() == self.config.operator,
            StepLaunchError::NotAuthorized
        );
        require!(
            amount <= self.config.accrued_fees,
            StepLaunchError::InsufficientBalance
        );

        self.config.accrued_fees = self
            .config
            .accrued_fees
            .checked_sub(amount)
            .ok_or(StepLaunchError::Overflow)?;

        let seeds = &[FEE_VAULT_SEED.as_bytes(), &[bumps.fee_vault]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Transfer {
                from: self.fee_vault.to_account_info(),
                to: self.treasury.to_account_info(),
            },
            signer_seeds,
        );
        transfer(cpi_ctx, amount)?;

        emit!(FeesWithdrawn {
            operator: self.operator.key(),
            treasury: self.treasury.key(),
            amount,
            remaining_accrued: self.config.accrued_fees,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
