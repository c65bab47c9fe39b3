use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StepLaunchError;
use crate::state::{Config, Registry};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED.as_bytes()],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Creates the config and registry singletons. The payer becomes the
    /// operator. All parameters are fixed for the lifetime of the
    /// deployment; there is no update path.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        treasury: Pubkey,
        listing_fee: u64,
        floor_price: u64,
        price_step: u64,
        bucket_size: u64,
        min_purchase_units: u64,
        max_purchase_units: u64,
        supply_cap: u64,
        raise_target: u64,
        fee_operator_bps: u16,
        fee_referral_bps: u16,
        bumps: InitializeBumps,
    ) -> Result<()> {
        require!(
            (fee_operator_bps as u64) + (fee_referral_bps as u64) < HUNDRED_PERCENT_BPS,
            StepLaunchError::InvalidFeeConfig
        );
        require!(bucket_size > 0, StepLaunchError::InvalidBucketSize);
        require!(
            min_purchase_units <= max_purchase_units,
            StepLaunchError::InvalidPurchaseBounds
        );

        self.config.set_inner(Config {
            operator: self.payer.key(),
            treasury,
            listing_fee,
            floor_price,
            price_step,
            bucket_size,
            min_purchase_units,
            max_purchase_units,
            supply_cap,
            raise_target,
            fee_operator_bps,
            fee_referral_bps,
            accrued_fees: 0,
            listings_created: 0,
            bump: bumps.config,
        });

        self.registry.set_inner(Registry {
            entries: Vec::new(),
            bump: bumps.registry,
        });

        Ok(())
    }
}
