//! Step Launch: a permissionless token-sale launchpad.
//!
//! Anyone can mint a fixed-supply token and list it for public sale. Units
//! are priced along a deterministic staircase schedule: the unit price is
//! flat within each fixed-size bucket of cumulative sales and steps up at
//! every bucket boundary. Purchase payments are split between the listing's
//! creator, the marketplace operator, and an optional referrer; a sale
//! closes when its creator says so or when the supply cap or raise target
//! is crossed.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod step_launch {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        ctx: Context<Initialize>,
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
    ) -> Result<()> {
        ctx.accounts.initialize(
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
            ctx.bumps,
        )
    }

    pub fn create_listing(
        ctx: Context<CreateListing>,
        name: String,
        symbol: String,
        image_uri: String,
        description: String,
        fee_payment: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_listing(name, symbol, image_uri, description, fee_payment, ctx.bumps)
    }

    pub fn purchase(ctx: Context<Purchase>, units: u64, payment: u64) -> Result<PurchaseReceipt> {
        ctx.accounts.purchase(units, payment)
    }

    pub fn close_sale(ctx: Context<CloseSale>) -> Result<()> {
        ctx.accounts.close_sale()
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_fees(amount, ctx.bumps)
    }

    pub fn claim_referral(ctx: Context<ClaimReferral>) -> Result<u64> {
        ctx.accounts.claim_referral(ctx.bumps)
    }

    pub fn get_listing_by_index(ctx: Context<RegistryView>, index: u64) -> Result<Pubkey> {
        ctx.accounts.get_listing_by_index(index)
    }

    pub fn get_creator_by_index(ctx: Context<RegistryView>, index: u64) -> Result<Pubkey> {
        ctx.accounts.get_creator_by_index(index)
    }

    pub fn get_listing_count(ctx: Context<RegistryView>) -> Result<u64> {
        ctx.accounts.get_listing_count()
    }

    pub fn get_referral_balance(ctx: Context<ReferralView>) -> Result<u64> {
        ctx.accounts.get_referral_balance()
    }
}
