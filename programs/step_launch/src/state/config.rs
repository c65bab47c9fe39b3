use anchor_lang::prelude::*;

use crate::constants::UNIT_SCALE;
use crate::error::StepLaunchError;
use crate::utils::{total_cost, unit_price};

/// Protocol-wide parameters, fixed at deployment by `initialize`.
/// There is deliberately no update instruction: the price schedule and fee
/// split must stay constant for the lifetime of the deployment.
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Authority allowed to withdraw accrued operator fees.
    pub operator: Pubkey,
    /// Wallet that receives withdrawn operator fees.
    pub treasury: Pubkey,

    /// One-time lamport fee charged for creating a listing.
    pub listing_fee: u64,

    /// Curve parameters: price starts at `floor_price` and rises by
    /// `price_step` every `bucket_size` base units sold.
    pub floor_price: u64,
    pub price_step: u64,
    pub bucket_size: u64,

    /// Per-purchase bounds on requested base units.
    pub min_purchase_units: u64,
    pub max_purchase_units: u64,

    /// Closure thresholds, evaluated after each accepted purchase.
    pub supply_cap: u64,
    pub raise_target: u64,

    /// Fee split in basis points.
    pub fee_operator_bps: u16,
    pub fee_referral_bps: u16,

    /// Operator fees collected but not yet withdrawn to the treasury.
    pub accrued_fees: u64,
    /// Total listings ever created; mirrors the registry length.
    pub listings_created: u64,

    pub bump: u8,
}

impl Config {
    /// Validates a purchase request against the per-call bounds and prices
    /// it at the given pre-purchase snapshot. Returns
    /// `(unit_price, total_cost)`. Every rejection happens here, before the
    /// caller mutates any state.
    pub fn quote_purchase(&self, units_sold: u64, units: u64, payment: u64) -> Result<(u64, u64)> {
        require!(units >= self.min_purchase_units, StepLaunchError::AmountTooLow);
        require!(units <= self.max_purchase_units, StepLaunchError::AmountTooHigh);

        let price = unit_price(units_sold, self.floor_price, self.price_step, self.bucket_size)?;
        let cost = total_cost(price, units, UNIT_SCALE)?;
        require!(payment >= cost, StepLaunchError::InsufficientFunds);

        Ok((price, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            operator: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            listing_fee: 1_000,
            floor_price: 100,
            price_step: 100,
            bucket_size: 10_000,
            min_purchase_units: UNIT_SCALE,
            max_purchase_units: 1_000 * UNIT_SCALE,
            supply_cap: u64::MAX,
            raise_target: u64::MAX,
            fee_operator_bps: 100,
            fee_referral_bps: 100,
            accrued_fees: 0,
            listings_created: 0,
            bump: 255,
        }
    }

    #[test]
    fn quote_enforces_the_purchase_bounds() {
        let config = config();

        assert_eq!(
            config
                .quote_purchase(0, UNIT_SCALE - 1, u64::MAX)
                .unwrap_err(),
            StepLaunchError::AmountTooLow.into()
        );
        assert_eq!(
            config
                .quote_purchase(0, 1_001 * UNIT_SCALE, u64::MAX)
                .unwrap_err(),
            StepLaunchError::AmountTooHigh.into()
        );
    }

    #[test]
    fn quote_charges_the_snapshot_price() {
        let config = config();

        // 3 whole units at the floor price
        let (price, cost) = config.quote_purchase(0, 3 * UNIT_SCALE, u64::MAX).unwrap();
        assert_eq!((price, cost), (100, 300));

        // one bucket in, the same quantity costs double
        let (price, cost) = config
            .quote_purchase(10_000, 3 * UNIT_SCALE, u64::MAX)
            .unwrap();
        assert_eq!((price, cost), (200, 600));
    }

    #[test]
    fn quote_rejects_underpayment() {
        let config = config();

        assert_eq!(
            config.quote_purchase(0, 3 * UNIT_SCALE, 299).unwrap_err(),
            StepLaunchError::InsufficientFunds.into()
        );
        assert!(config.quote_purchase(0, 3 * UNIT_SCALE, 300).is_ok());
    }
}
