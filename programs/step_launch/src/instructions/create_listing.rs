use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2,
        mpl_token_metadata::ID as METAPLEX_ID, CreateMetadataAccountsV3, Metadata as Metaplex,
    },
    token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface},
};
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::error::StepLaunchError;
use crate::events::ListingCreated;
use crate::state::{Config, Listing, ListingEntry, Registry};

/// # CreateListing Instruction
///
/// Anyone may list a new token for sale: this creates the fixed-supply mint,
/// its metadata, the sale vault holding the full supply, and the listing
/// record, and appends the listing to the registry in creation order.
///
/// The caller pays a one-time listing fee which is retained for the
/// marketplace operator. The actual sale then runs through `purchase` along
/// the step price schedule configured at deployment.
#[derive(Accounts)]
pub struct CreateListing<'info> {
    /// Pays the listing fee and all account creation costs, and becomes the
    /// listing's creator: the only identity allowed to close the sale, and
    /// the recipient of its net proceeds.
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED.as_bytes()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The sale record for the new token. The PDA derivation from the mint
    /// key is the registry's `assetId -> Listing` mapping.
    #[account(
        init,
        payer = creator,
        space = 8 + Listing::INIT_SPACE,
        seeds = [LISTING_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
    )]
    pub listing: Account<'info, Listing>,

    /// Holds listing fees and operator purchase fees until withdrawn.
    #[account(
        mut,
        seeds = [FEE_VAULT_SEED.as_bytes()],
        bump,
    )]
    pub fee_vault: SystemAccount<'info>,

    /// The token mint that will be created. The listing PDA is the mint and
    /// freeze authority, so supply is fixed after the initial mint below.
    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = listing,
        mint::freeze_authority = listing,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Vault owned by the listing PDA holding the unsold supply.
    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = listing,
    )]
    pub listing_token_vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: created and validated by the Metaplex metadata program.
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    #[account(address = METAPLEX_ID)]
    pub token_metadata_program: Program<'info, Metaplex>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,

    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateListing<'info> {
    pub fn create_listing(
        &mut self,
        name: String,
        symbol: String,
        image_uri: String,
        description: String,
        fee_payment: u64,
        bumps: CreateListingBumps,
    ) -> Result<()> {
        // All failure cases are checked before any state change or CPI.
        require!(
            fee_payment >= self.config.listing_fee,
            StepLaunchError::FeeRequired
        );
        require!(self.registry.has_capacity(), StepLaunchError::RegistryFull);

        // Record the listing before any external call.
        let index = self.registry.push(ListingEntry {
            mint: self.token_mint.key(),
            creator: self.creator.key(),
        })?;

        self.config.listings_created = self
            .config
            .listings_created
            .checked_add(1)
            .ok_or(StepLaunchError::Overflow)?;
        self.config.accrued_fees = self
            .config
            .accrued_fees
            .checked_add(fee_payment)
            .ok_or(StepLaunchError::Overflow)?;

        self.listing.set_inner(Listing {
            token_mint: self.token_mint.key(),
            creator: self.creator.key(),
            name: name.clone(),
            image_uri: image_uri.clone(),
            description,
            units_sold: 0,
            amount_raised: 0,
            is_open: true,
            settling: false,
            index,
            bump: bumps.listing,
        });

        // The listing fee is retained for the operator.
        let fee_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.creator.to_account_info(),
                to: self.fee_vault.to_account_info(),
            },
        );
        transfer(fee_ctx, fee_payment)?;

        let token_data = DataV2 {
            name,
            symbol,
            uri: image_uri,
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };

        let token_mint_key = self.token_mint.key();
        let seeds = &[
            LISTING_SEED.as_bytes(),
            token_mint_key.as_ref(),
            &[bumps.listing],
        ];
        let signer = &[&seeds[..]];

        let metadata_ctx = CpiContext::new_with_signer(
            self.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: self.metadata.to_account_info(),
                mint: self.token_mint.to_account_info(),
                mint_authority: self.listing.to_account_info(),
                update_authority: self.listing.to_account_info(),
                payer: self.creator.to_account_info(),
                system_program: self.system_program.to_account_info(),
                rent: self.rent.to_account_info(),
            },
            signer,
        );
        create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;

        // Mint the entire fixed supply into the sale vault. The listing PDA
        // keeps the mint authority, so nothing can be minted afterwards.
        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.token_mint.to_account_info(),
                    to: self.listing_token_vault.to_account_info(),
                    authority: self.listing.to_account_info(),
                },
                signer,
            ),
            TOTAL_SUPPLY,
        )?;

        emit!(ListingCreated {
            token_mint: self.token_mint.key(),
            listing: self.listing.key(),
            creator: self.creator.key(),
            index,
            listing_fee_paid: fee_payment,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
