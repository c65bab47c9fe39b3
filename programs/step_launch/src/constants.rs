use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const REGISTRY_SEED: &str = "registry";
#[constant]
pub const LISTING_SEED: &str = "listing";
#[constant]
pub const FEE_VAULT_SEED: &str = "fee_vault";
#[constant]
pub const REFERRAL_VAULT_SEED: &str = "referral_vault";
#[constant]
pub const REFERRAL_SEED: &str = "referral";

/// Decimals of every mint created through the launchpad.
pub const TOKEN_DECIMALS: u8 = 6;

/// Base units per whole curve unit (10^TOKEN_DECIMALS).
pub const UNIT_SCALE: u64 = 1_000_000;

/// Fixed supply minted into the sale vault for every listing:
/// 1 billion tokens with 6 decimals.
pub const TOTAL_SUPPLY: u64 = 1_000_000_000_000_000;

/// Denominator for basis-point fee math.
pub const HUNDRED_PERCENT_BPS: u64 = 10_000;

/// Registry capacity. Must match the `max_len` on `Registry::entries`.
pub const MAX_LISTINGS: usize = 128;
