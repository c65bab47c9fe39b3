use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::error::StepLaunchError;
use crate::events::{SaleClosed, TokensPurchased};
use crate::state::{Config, Listing, ReferralAccount};
use crate::utils::split_payment;

/// Returned to the caller after an accepted purchase.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub units: u64,
    pub unit_price: u64,
    pub total_cost: u64,
    pub operator_fee: u64,
    pub referral_reward: u64,
    pub creator_proceeds: u64,
    /// False when this purchase closed the sale.
    pub sale_open: bool,
}

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [LISTING_SEED.as_bytes(), token_mint.key().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    /// Receives the buyer's tokens.
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = token_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Sale vault owned by the listing PDA.
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = listing,
    )]
    pub listing_token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The listing's creator wallet; proceeds are pushed here on every
    /// purchase.
    #[account(
        mut,
        address = listing.creator,
    )]
    pub creator: SystemAccount<'info>,

    /// Wallet credited with the referral share. Callers without a referrer
    /// pass their own wallet here; a self referral earns nothing and the
    /// share folds into the creator's proceeds.
    pub referrer: SystemAccount<'info>,

    /// Referral balance for `referrer`, created on first accrual. Optional:
    /// when absent no referral reward is paid out.
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + ReferralAccount::INIT_SPACE,
        seeds = [REFERRAL_SEED.as_bytes(), referrer.key().as_ref()],
        bump,
    )]
    pub referral_account: Option<Account<'info, ReferralAccount>>,

    #[account(
        mut,
        seeds = [FEE_VAULT_SEED.as_bytes()],
        bump,
    )]
    pub fee_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [REFERRAL_VAULT_SEED.as_bytes()],
        bump,
    )]
    pub referral_vault: SystemAccount<'info>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

impl<'info> Purchase<'info> {
    pub fn purchase(&mut self, units: u64, payment: u64) -> Result<PurchaseReceipt> {
        // --- validate: nothing is mutated until every check has passed ---
        self.listing.ensure_open()?;
        require!(!self.listing.settling, StepLaunchError::ReentrantCall);

        // The whole quantity is priced at the pre-purchase snapshot, even
        // when it crosses a bucket boundary.
        let (price, cost) =
            self.config
                .quote_purchase(self.listing.units_sold, units, payment)?;

        let has_referrer =
            self.referrer.key() != self.buyer.key() && self.referral_account.is_some();
        let split = split_payment(
            cost,
            self.config.fee_operator_bps,
            self.config.fee_referral_bps,
            has_referrer,
        )?;

        // --- effects: ledger state is final before any external transfer ---
        self.listing.begin_settlement()?;
        let closed_now = self.listing.record_purchase(
            units,
            split.creator_proceeds,
            self.config.supply_cap,
            self.config.raise_target,
        )?;

        self.config.accrued_fees = self
            .config
            .accrued_fees
            .checked_add(split.operator_fee)
            .ok_or(StepLaunchError::Overflow)?;

        if split.referral_reward > 0 {
            if let Some(referral_account) = self.referral_account.as_mut() {
                if referral_account.referrer == Pubkey::default() {
                    // first accrual for this referrer
                    let referrer_key = self.referrer.key();
                    let (_, bump) = Pubkey::find_program_address(
                        &[REFERRAL_SEED.as_bytes(), referrer_key.as_ref()],
                        &crate::ID,
                    );
                    referral_account.referrer = referrer_key;
                    referral_account.bump = bump;
                }
                referral_account.accrue(split.referral_reward)?;
            }
        }

        // Persist the listing (including the settlement lock) so any
        // re-entrant invocation observes the committed state, not the
        // pre-purchase snapshot.
        self.listing.exit(&crate::ID)?;

        // --- interactions ---
        let fee_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.buyer.to_account_info(),
                to: self.fee_vault.to_account_info(),
            },
        );
        transfer(fee_ctx, split.operator_fee)?;

        if split.referral_reward > 0 {
            let referral_ctx = CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.buyer.to_account_info(),
                    to: self.referral_vault.to_account_info(),
                },
            );
            transfer(referral_ctx, split.referral_reward)?;
        }

        let proceeds_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.buyer.to_account_info(),
                to: self.creator.to_account_info(),
            },
        );
        transfer(proceeds_ctx, split.creator_proceeds)?;

        let token_mint_key = self.token_mint.key();
        let seeds = &[
            LISTING_SEED.as_bytes(),
            token_mint_key.as_ref(),
            &[self.listing.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let token_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            TransferChecked {
                from: self.listing_token_vault.to_account_info(),
                to: self.buyer_token_account.to_account_info(),
                mint: self.token_mint.to_account_info(),
                authority: self.listing.to_account_info(),
            },
            signer_seeds,
        );
        transfer_checked(token_ctx, units, self.token_mint.decimals)?;

        self.listing.end_settlement();

        let now = Clock::get()?.unix_timestamp;
        emit!(TokensPurchased {
            token_mint: self.token_mint.key(),
            buyer: self.buyer.key(),
            units,
            unit_price: price,
            total_cost: cost,
            operator_fee: split.operator_fee,
            referral_reward: split.referral_reward,
            creator_proceeds: split.creator_proceeds,
            units_sold: self.listing.units_sold,
            amount_raised: self.listing.amount_raised,
            sale_open: self.listing.is_open,
            timestamp: now,
        });
        if closed_now {
            emit!(SaleClosed {
                token_mint: self.token_mint.key(),
                closed_by: self.buyer.key(),
                units_sold: self.listing.units_sold,
                amount_raised: self.listing.amount_raised,
                timestamp: now,
            });
        }

        Ok(PurchaseReceipt {
            units,
            unit_price: price,
            total_cost: cost,
            operator_fee: split.operator_fee,
            referral_reward: split.referral_reward,
            creator_proceeds: split.creator_proceeds,
            sale_open: self.listing.is_open,
        })
    }
}
